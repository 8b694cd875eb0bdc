use html_escape::{encode_double_quoted_attribute, encode_text};

use super::StreakReport;

pub const DEFAULT_CARD_COLOR: &str = "#FF8C42";

const MAX_TABS_PER_ROW: usize = 4;
const MIN_CARD_WIDTH: u32 = 300;
const TAB_STRIDE_X: u32 = 140;
const TAB_ROW_HEIGHT: u32 = 55;
const HEADER_HEIGHT: u32 = 100;
const EDGE_PADDING: u32 = 20;

/// User-facing card options
#[derive(Debug, Clone, Default)]
pub struct CardSpec {
    pub name: String,
    pub greeting: String,
    /// `#rrggbb`; anything else falls back to the default colour
    pub color: Option<String>,
}

impl CardSpec {
    fn show_header(&self) -> bool {
        !self.name.trim().is_empty() || !self.greeting.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLayout {
    pub tabs_per_row: u32,
    pub rows: u32,
    pub width: u32,
    pub height: u32,
    pub header_height: u32,
}

impl CardLayout {
    pub fn new(tab_count: usize, show_header: bool) -> Self {
        let tabs_per_row = tab_count.min(MAX_TABS_PER_ROW) as u32;
        let rows = if tabs_per_row == 0 {
            0
        } else {
            (tab_count as u32).div_ceil(tabs_per_row)
        };
        let header_height = if show_header { HEADER_HEIGHT } else { 0 };

        Self {
            tabs_per_row,
            rows,
            width: MIN_CARD_WIDTH.max(EDGE_PADDING + tabs_per_row * TAB_STRIDE_X),
            height: header_height + rows * TAB_ROW_HEIGHT + EDGE_PADDING,
            header_height,
        }
    }

    /// Top-left corner of the tab at `index`
    pub fn tab_origin(&self, index: usize) -> (u32, u32) {
        let per_row = self.tabs_per_row.max(1);
        let index = index as u32;
        let (row, col) = (index / per_row, index % per_row);
        (
            EDGE_PADDING + col * TAB_STRIDE_X,
            self.header_height + 10 + row * TAB_ROW_HEIGHT,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardPalette {
    pub base: String,
    pub lighter: String,
    pub darker: String,
}

impl CardPalette {
    pub fn from_hex(color: Option<&str>) -> Self {
        let rgb = color
            .and_then(parse_hex)
            .or_else(|| parse_hex(DEFAULT_CARD_COLOR))
            .unwrap_or((255, 140, 66));

        let (r, g, b) = rgb;
        Self {
            base: to_hex(r, g, b),
            lighter: to_hex(r.saturating_add(40), g.saturating_add(40), b.saturating_add(40)),
            darker: to_hex(r.saturating_sub(30), g.saturating_sub(30), b.saturating_sub(30)),
        }
    }
}

fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

fn to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Render the streak card as an SVG document. Tiles follow the order of `reports`.
pub fn render_card(spec: &CardSpec, reports: &[StreakReport]) -> String {
    let layout = CardLayout::new(reports.len(), spec.show_header());
    let palette = CardPalette::from_hex(spec.color.as_deref());
    let (width, height) = (layout.width, layout.height);

    let mut svg = String::with_capacity(2048 + reports.len() * 512);

    svg.push_str(&format!(
        r##"<svg width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <linearGradient id="bgGrad" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:{lighter};stop-opacity:1" />
      <stop offset="50%" style="stop-color:{base};stop-opacity:1" />
      <stop offset="100%" style="stop-color:{darker};stop-opacity:1" />
    </linearGradient>
    <style>
      .tab {{ transition: opacity 0.3s; cursor: pointer; }}
      .tab:hover rect {{ opacity: 1 !important; }}
      a {{ cursor: pointer; }}
    </style>
  </defs>
  <rect width="{width}" height="{height}" fill="#FFF5EB" rx="12"/>
  <rect width="{width}" height="{height}" fill="none" stroke="{lighter}" stroke-width="3" rx="12"/>
"##,
        lighter = palette.lighter,
        base = palette.base,
        darker = palette.darker,
    ));

    if layout.header_height > 0 {
        push_header(&mut svg, spec, &layout);
    }

    for (index, report) in reports.iter().enumerate() {
        let (x, y) = layout.tab_origin(index);
        svg.push_str(&format!(
            r#"  <a href="{url}" target="_blank" rel="noopener noreferrer">
    <g class="tab">
      <rect x="{x}" y="{y}" width="130" height="45" fill="{base}" rx="8" opacity="0.95"/>
      <text x="{text_x}" y="{label_y}" fill="white" font-size="13" font-weight="600">{label}</text>
      <text x="{text_x}" y="{count_y}" fill="white" font-size="18" font-weight="700">{days} days 🔥</text>
    </g>
  </a>
"#,
            url = encode_double_quoted_attribute(&report.url),
            base = palette.base,
            text_x = x + 10,
            label_y = y + 20,
            count_y = y + 36,
            label = encode_text(&report.display_name),
            days = report.result.streak_days,
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

fn push_header(svg: &mut String, spec: &CardSpec, layout: &CardLayout) {
    let width = layout.width;
    let header_height = layout.header_height;
    svg.push_str(&format!(
        r#"  <rect width="{width}" height="{header_height}" fill="url(#bgGrad)" rx="12"/>
  <rect y="12" width="{width}" height="{body}" fill="url(#bgGrad)"/>
"#,
        body = header_height - 12,
    ));

    let has_name = !spec.name.trim().is_empty();
    if has_name {
        svg.push_str(&format!(
            "  <text x=\"30\" y=\"38\" fill=\"white\" font-size=\"32\" font-weight=\"bold\">{}</text>\n",
            encode_text(spec.name.trim())
        ));
    }
    if !spec.greeting.trim().is_empty() {
        svg.push_str(&format!(
            "  <text x=\"30\" y=\"{}\" fill=\"white\" font-size=\"15\" opacity=\"0.95\">{}</text>\n",
            if has_name { 65 } else { 50 },
            encode_text(spec.greeting.trim())
        ));
    }
}
