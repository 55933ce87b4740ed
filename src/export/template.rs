//! Print-ready document template.
//!
//! Pure string construction: structured list data in, paginated bilingual
//! HTML out. The caller hands the result to whatever HTML-to-PDF engine the
//! host provides; nothing here touches the filesystem or network, and
//! identical inputs always produce byte-identical output.

use crate::models::{EventInfo, HeaderDesign, HeaderSource, ListRow, ListType, ProfileInfo};
use crate::utils::date::display_date;
use crate::utils::formatting::format_quantity;

/// Every page shows exactly this many numbered rows, split over two columns.
/// Short pages are padded with blank rows so the grid height never varies.
pub const ROWS_PER_PAGE: usize = 40;
pub const PER_COLUMN: usize = 20;

/// Pages needed for `items` rows. Zero rows still produce one (blank) page.
pub fn page_count(items: usize) -> usize {
    items.div_ceil(ROWS_PER_PAGE).max(1)
}

/// Escape the four HTML-significant characters. Applied to every
/// user-supplied string before interpolation; item names and footer notes
/// come from free-text fields and must never reach the document as markup.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// A4 layout, fixed table geometry. Kept as one block so the output contract
/// stays in one place.
const STYLE: &str = r#"
  @page {
    size: A4;
    margin: 0;
  }

  body {
    margin: 0;
    font-family: Arial, sans-serif;
    background: #ffffff;
  }

  .page {
    width: 210mm;
    height: 297mm;
    page-break-after: always;
    display: flex;
    flex-direction: column;
  }

  .footer {
    width: 95%;
    margin: 0 auto 20px auto;
    text-align: center;
    font-size: 13px;
    font-weight: 500;
    border-top: 1px solid #B3B3B3;
    padding-top: 8px;
  }

  .header-wrapper {
    width: 100%;
    margin-top: 25px;
    display: flex;
    justify-content: center;
  }

  .header {
    width: 95%;
    background: linear-gradient(90deg,#1B319F,#3B7DC4);
    color: white;
    padding: 25px 35px;
    display: flex;
    justify-content: space-between;
    align-items: center;
  }

  .header-left {
    display: flex;
    align-items: center;
    gap: 18px;
  }

  .logo-wrap {
    width: 75px;
    height: 75px;
    border-radius: 50%;
    overflow: hidden;
    background: yellow;
  }

  .logo-img {
    width: 100%;
    height: 100%;
    object-fit: cover;
  }

  .logo-placeholder {
    width: 100%;
    height: 100%;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 32px;
    font-weight: bold;
  }

  .company-name {
    font-size: 28px;
    font-weight: bold;
  }

  .company-address {
    font-size: 14px;
    margin-top: 6px;
  }

  .company-mobile {
    font-size: 20px;
    font-weight: bold;
  }

  .custom-header {
    width: 95%;
    margin: 25px auto 10px auto;
  }

  .custom-header-img {
    width: 100%;
    height: 160px;
    object-fit: cover;
    border-radius: 8px;
  }

  .event-row {
    width: 95%;
    margin: 15px auto;
    display: flex;
    justify-content: space-between;
    font-weight: 600;
  }

  .table-wrap {
    width: 95%;
    margin: 0 auto;
    margin-bottom: 25px;
    flex: 1;
    display: flex;
    gap: 20px;
  }

  .column {
    flex: 1;
  }

  table {
    width: 100%;
    height: 100%;
    border-collapse: collapse;
    font-size: 12px;
    border: 1px solid #1B319F;
    table-layout: fixed;
  }

  th {
    background: #EDE7F6;
    border: 1px solid #B3B3B3;
    padding: 6px;
    text-align: center;
  }

  th:nth-child(1), td:nth-child(1) { width: 5%; }
  th:nth-child(2), td:nth-child(2) { width: 65%; }
  th:nth-child(3), td:nth-child(3) { width: 10%; }
  th:nth-child(4), td:nth-child(4) { width: 10%; }
  th:nth-child(5), td:nth-child(5) { width: 10%; }

  td {
    border: 1px solid #B3B3B3;
    padding: 6px;
    text-align: center;
  }

  td:nth-child(2) {
    text-align: left;
  }

  tbody tr {
    height: 24px;
  }
"#;

/// Tamil column headings: serial no., items, kg, gram, unit.
const COLUMN_HEAD: &str =
    "<tr><th>எ</th><th>பொருள்கள்</th><th>கி</th><th>கிரா</th><th>அ</th></tr>";

fn header_block(source: &HeaderSource, profile: &ProfileInfo) -> String {
    match source {
        HeaderSource::Custom { url } => {
            let url = escape_html(url);
            format!(
                r#"<div class="header-wrapper">
  <div class="custom-header">
    <img src="{url}" class="custom-header-img" />
  </div>
</div>
"#
            )
        }
        HeaderSource::Profile => {
            let name = escape_html(&profile.name);
            let mobile = escape_html(&profile.mobile);
            let address = escape_html(&profile.address);

            let avatar = match &profile.profile_image {
                Some(img) if !img.is_empty() => {
                    format!(r#"<img src="{}" class="logo-img" />"#, escape_html(img))
                }
                _ => format!(
                    r#"<div class="logo-placeholder">{}</div>"#,
                    escape_html(&profile.initial())
                ),
            };

            format!(
                r#"<div class="header-wrapper">
  <div class="header">
    <div class="header-left">
      <div class="logo-wrap">{avatar}</div>
      <div class="company-info">
        <div class="company-name">{name}</div>
        <div class="company-address">{address}</div>
      </div>
    </div>
    <div class="header-right">
      <div class="company-mobile">{mobile}</div>
    </div>
  </div>
</div>
"#
            )
        }
    }
}

/// One column of `PER_COLUMN` table rows starting at `start`. Slots beyond
/// the data keep their serial number and render blank cells, so every column
/// is always 20 rows tall.
fn column_rows(items: &[ListRow], start: usize) -> String {
    let mut html = String::new();

    for i in 0..PER_COLUMN {
        let row = items.get(start + i);
        let s_no = start + i + 1;

        let name = row
            .filter(|r| !r.name.is_empty())
            .map(|r| escape_html(&r.name))
            .unwrap_or_default();
        let kg = row
            .filter(|r| r.kg != 0.0)
            .map(|r| format_quantity(r.kg))
            .unwrap_or_default();
        let gram = row
            .filter(|r| r.gram != 0.0)
            .map(|r| format_quantity(r.gram))
            .unwrap_or_default();
        let alavu = row
            .filter(|r| !r.alavu.is_empty())
            .map(|r| escape_html(&r.alavu))
            .unwrap_or_default();

        html.push_str(&format!(
            "<tr><td>{s_no}</td><td>{name}</td><td>{kg}</td><td>{gram}</td><td>{alavu}</td></tr>\n"
        ));
    }

    html
}

fn page_block(
    event: &EventInfo,
    list_type: ListType,
    items: &[ListRow],
    start: usize,
    header: &str,
    footer_text: &str,
) -> String {
    let title = escape_html(&event.title);
    let date = event.date.map(display_date).unwrap_or_default();
    let label = list_type.tamil_label();

    let footer = if footer_text.is_empty() {
        String::new()
    } else {
        format!(
            "<div class=\"footer\">{}</div>\n",
            escape_html(footer_text)
        )
    };

    format!(
        r#"<div class="page">
{header}
<div class="event-row">
  <div>
    {title}<br/>
    <span style="font-weight:500;font-size:14px;">{label}</span>
  </div>
  <div>{date}</div>
</div>
<div class="table-wrap">
  <div class="column">
    <table>
      <thead>{head}</thead>
      <tbody>
{left}      </tbody>
    </table>
  </div>
  <div class="column">
    <table>
      <thead>{head}</thead>
      <tbody>
{right}      </tbody>
    </table>
  </div>
</div>
{footer}</div>
"#,
        head = COLUMN_HEAD,
        left = column_rows(items, start),
        right = column_rows(items, start + PER_COLUMN),
    )
}

/// Render the full paginated document for one list.
///
/// `items` must already be sanitized (blank rows dropped, `s_no` sequential
/// from 1); the generator does not re-validate. The header variant is
/// resolved once per call: a custom design with a URL replaces the profile
/// block entirely, anything else falls back to the profile block. Header,
/// title block and footer repeat on every page so each printed page is
/// self-contained.
pub fn generate_document(
    event: &EventInfo,
    list_type: ListType,
    items: &[ListRow],
    profile: &ProfileInfo,
    design: HeaderDesign,
    custom_design_url: Option<&str>,
    footer_text: &str,
) -> String {
    let source = HeaderSource::resolve(design, custom_design_url);
    let header = header_block(&source, profile);

    let mut html = format!(
        "<html>\n<head>\n<meta charset=\"utf-8\" />\n<style>{STYLE}</style>\n</head>\n<body>\n"
    );

    for p in 0..page_count(items.len()) {
        let start = p * ROWS_PER_PAGE;
        html.push_str(&page_block(
            event,
            list_type,
            items,
            start,
            &header,
            footer_text,
        ));
    }

    html.push_str("</body></html>\n");
    html
}
