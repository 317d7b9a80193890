//! SVG icon and preview image generation

pub const DEFAULT_ICON_SIZE: u32 = 192;
pub const DEFAULT_OG_TITLE: &str = "MSME Service Assistant";

const MIN_ICON_SIZE: u32 = 16;
const MAX_ICON_SIZE: u32 = 1024;

const GRADIENT: &str = r##"<defs>
    <linearGradient id="grad1" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:#2563eb;stop-opacity:1" />
      <stop offset="100%" style="stop-color:#1e40af;stop-opacity:1" />
    </linearGradient>
  </defs>"##;

/// Parse a `?size=` value. Missing or invalid → default; otherwise clamped.
pub fn parse_size(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .map(|s| s.clamp(MIN_ICON_SIZE, MAX_ICON_SIZE))
        .unwrap_or(DEFAULT_ICON_SIZE)
}

/// Rounded square with an "M" monogram, scaled to `size`.
pub fn icon_svg(size: u32) -> String {
    let s = f64::from(size);
    format!(
        r#"<svg width="{size}" height="{size}" xmlns="http://www.w3.org/2000/svg">
  {gradient}
  <rect width="{size}" height="{size}" rx="{rx}" fill="url(#grad1)"/>
  <g transform="translate({half}, {half})">
    <rect x="{inner_off}" y="{inner_off}" width="{inner}" height="{inner}" rx="{inner_rx}" fill="white" opacity="0.2"/>
    <text x="0" y="{text_y}" font-family="Arial, sans-serif" font-size="{font}" fill="white" text-anchor="middle" font-weight="bold">M</text>
  </g>
</svg>"#,
        gradient = GRADIENT,
        rx = s * 0.15,
        half = s / 2.0,
        inner_off = -s * 0.25,
        inner = s * 0.5,
        inner_rx = s * 0.05,
        text_y = s * 0.1,
        font = s * 0.3,
    )
}

/// App icon with the building glyph, drawn on a 192 grid and scaled.
pub fn app_icon_svg(size: u32) -> String {
    let k = f64::from(size) / 192.0;
    let v = |x: f64| x * k;
    format!(
        r##"<svg width="{size}" height="{size}" xmlns="http://www.w3.org/2000/svg">
  {gradient}
  <rect width="{size}" height="{size}" rx="{rx}" fill="url(#grad1)"/>
  <g transform="translate({half}, {half})">
    <circle cx="0" cy="0" r="{r}" fill="white" opacity="0.15"/>
    <rect x="{bx}" y="{by}" width="{bw}" height="{bh}" rx="{brx}" fill="white"/>
    <rect x="{w1}" y="{wy}" width="{ww}" height="{wh}" rx="{wrx}" fill="#2563eb"/>
    <rect x="{w2}" y="{wy}" width="{ww}" height="{wh}" rx="{wrx}" fill="#2563eb"/>
    <rect x="{w3}" y="{wy}" width="{ww}" height="{wh}" rx="{wrx}" fill="#2563eb"/>
    <rect x="{bx}" y="{base_y}" width="{bw}" height="{base_h}" rx="{brx}" fill="white"/>
  </g>
</svg>"##,
        gradient = GRADIENT,
        rx = v(28.0),
        half = v(96.0),
        r = v(60.0),
        bx = v(-35.0),
        by = v(-25.0),
        bw = v(70.0),
        bh = v(40.0),
        brx = v(4.0),
        w1 = v(-30.0),
        w2 = v(-5.0),
        w3 = v(20.0),
        wy = v(-15.0),
        ww = v(20.0),
        wh = v(25.0),
        wrx = v(2.0),
        base_y = v(20.0),
        base_h = v(8.0),
    )
}

/// 1280×720 social preview card.
pub fn og_image_svg(title: Option<&str>) -> String {
    let title = title
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_OG_TITLE);

    format!(
        r##"<svg width="1280" height="720" xmlns="http://www.w3.org/2000/svg">
  {gradient}
  <rect width="1280" height="720" fill="url(#grad1)"/>
  <text x="640" y="320" font-family="Arial, sans-serif" font-size="48" fill="white" text-anchor="middle" font-weight="bold">{}</text>
  <text x="640" y="400" font-family="Arial, sans-serif" font-size="24" fill="#e2e8f0" text-anchor="middle">Comprehensive MSME service assistant for Indian entrepreneurs</text>
  <circle cx="640" cy="500" r="40" fill="white" opacity="0.1"/>
  <text x="640" y="510" font-family="Arial, sans-serif" font-size="20" fill="white" text-anchor="middle">🏢</text>
</svg>"##,
        escape_xml(title),
        gradient = GRADIENT,
    )
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size(None), 192);
        assert_eq!(parse_size(Some("512")), 512);
        assert_eq!(parse_size(Some("abc")), 192);
        assert_eq!(parse_size(Some("4")), 16);
        assert_eq!(parse_size(Some("99999")), 1024);
    }

    #[test]
    fn test_icon_scales_geometry() {
        let svg = icon_svg(200);
        assert!(svg.contains(r#"width="200" height="200""#));
        assert!(svg.contains(r#"rx="30""#));
        assert!(svg.contains(r#"font-size="60""#));
        assert!(svg.contains("translate(100, 100)"));
    }

    #[test]
    fn test_app_icon_scales() {
        let svg = app_icon_svg(192);
        assert!(svg.contains(r#"r="60""#));
        let big = app_icon_svg(384);
        assert!(big.contains(r#"r="120""#));
    }

    #[test]
    fn test_og_title_is_escaped() {
        let svg = og_image_svg(Some("Loans & <Grants>"));
        assert!(svg.contains("Loans &amp; &lt;Grants&gt;"));
        assert!(og_image_svg(None).contains(DEFAULT_OG_TITLE));
    }
}
