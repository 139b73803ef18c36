//! Printable A4 menu page

use log::debug;

pub const DEFAULT_BACKGROUND: &str
  = "https://images.unsplash.com/photo-1555396273-367ea4eb4db5";

const PAGE_BACKGROUND: &str
  = "https://media.istockphoto.com/id/522474608/photo/place-setting-shot-directly-above.jpg\
     ?s=612x612&w=0&k=20&c=ATOlj0zxYlFCJvLMhBawvAzdaJWuSl0WKPAU4V94JPc=";

const CUISINE_BACKGROUNDS: &[(&str, &str)] = &[
  ("Italian", "https://images.unsplash.com/photo-1551183053-bf91a1d81141")
, ("Chinese", "https://images.unsplash.com/photo-1585841773408-1146318370de")
, ("Mexican", "https://images.unsplash.com/photo-1565299715636-c6b817b07436")
, ("Indian", "https://images.unsplash.com/photo-1567188040759-fb8a883dc6d8")
, ("French", "https://images.unsplash.com/photo-1511920183863-9b8f36214311")
, ("Japanese", "https://images.unsplash.com/photo-1569308027668-30948e5898d0")
, ("Mediterranean", "https://images.unsplash.com/photo-1600326145550-2defda9789f2")
];

const FOOTER: &str = "Bon Appétit!";

const STYLE: &str = r#"
body { background: #222; }
.a4-menu {
  background: url('{page_bg}') center center/cover no-repeat;
  width: 21cm; height: 29.7cm; margin: 32px auto;
  box-shadow: 0 0 24px 4px rgba(0,0,0,0.15); border-radius: 12px;
  display: flex; flex-direction: column; align-items: center;
  justify-content: center; position: relative; overflow: hidden;
  font-family: 'Georgia', 'Times New Roman', Times, serif;
}
.menu-overlay {
  background: rgba(255,255,255,0.7); width: 85%; border-radius: 14px;
  padding: 2.5cm 2cm 2cm 2cm; box-sizing: border-box;
  display: flex; flex-direction: column; align-items: center;
  box-shadow: 0 8px 32px 0 rgba(0,0,0,0.12);
}
.menu-title {
  font-size: 2.7rem; font-family: 'Playfair Display', serif;
  font-weight: bold; letter-spacing: 2px; color: #2d2d2d;
  text-align: center; width: 100%; margin-bottom: 0.5em;
  border-bottom: 2px solid #e0c097; padding-bottom: 0.2em;
}
.menu-section-title {
  font-size: 1.3rem; color: #b48a3a; font-family: 'Playfair Display', serif;
  margin: 1.5em 0 0.5em 0; letter-spacing: 1px; text-align: center;
}
.menu-items-container { width: 80%; margin: 0 auto; padding: 1em 2em; }
.menu-item {
  font-size: 1.18rem; color: #333; display: block; width: 100%;
  margin-bottom: 1.2em; padding-bottom: 0.8em; line-height: 1.6;
  border-bottom: 1px dotted #e0c097; text-align: left;
}
.menu-empty { text-align: center; color: #bbb; margin-top: 3cm; }
.restaurant-footer {
  margin-top: 2em; width: 100%; text-align: center; color: #b48a3a;
  font-size: 1.1rem; font-family: 'Playfair Display', serif; letter-spacing: 1px;
}
@media print {
  body { background: #fff !important; }
  .a4-menu { box-shadow: none !important; margin: 0 !important; border-radius: 0 !important; }
  .menu-overlay { background: rgba(255,255,255,0.85) !important; padding: 1cm !important; }
}
"#;

/// Background image for a cuisine, ignoring case
pub fn background_for(cuisine: &str) -> &'static str
{   let cuisine = cuisine.trim();
    CUISINE_BACKGROUNDS
      .iter()
      .find(|(name, _)| name.eq_ignore_ascii_case(cuisine))
      .map(|(_, url)| *url)
      .unwrap_or(DEFAULT_BACKGROUND)
}

/// The cuisines with a dedicated background
pub fn known_cuisines() -> impl Iterator<Item = &'static str>
{   CUISINE_BACKGROUNDS.iter().map(|(name, _)| *name)
}

/// Escape text for HTML element and attribute content
pub fn escape_html(text: &str) -> String
{   let mut out = String::with_capacity(text.len());
    for c in text.chars()
    {   match c
        {   '&' => out.push_str("&amp;")
          , '<' => out.push_str("&lt;")
          , '>' => out.push_str("&gt;")
          , '"' => out.push_str("&quot;")
          , '\'' => out.push_str("&#39;")
          , _ => out.push(c)
        }
    }
    out
}

fn page(title: &str, body: &str) -> String
{   format!(
      "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
       <title>{title}</title>\n<style>{style}</style>\n</head>\n\
       <body>\n<div class=\"a4-menu\">\n<div class=\"menu-overlay\">\n\
       <div class=\"menu-title\">{title}</div>\n\
       <div class=\"menu-section-title\">Menu Items</div>\n\
       {body}\n\
       <div class=\"restaurant-footer\">{footer}</div>\n\
       </div>\n</div>\n</body>\n</html>\n",
      title = title,
      style = STYLE.replace("{page_bg}", PAGE_BACKGROUND),
      body = body,
      footer = FOOTER,
    )
}

/// Render a named menu; items are numbered from 1
pub fn render_menu<S: AsRef<str>>(name: &str, items: &[S]) -> String
{   let items: Vec<&str> = items
      .iter()
      .map(|i| i.as_ref().trim())
      .filter(|i| !i.is_empty())
      .collect();
    debug!("Rendering {} menu items", items.len());

    let body = if items.is_empty()
    {   "<div class=\"menu-empty\"><em>No menu items were suggested.</em></div>"
          .to_string()
    } else
    {   let rows: String = items
          .iter()
          .enumerate()
          .map(|(i, item)| format!(
            "<div class=\"menu-item\">{}. {}</div>\n",
            i + 1,
            escape_html(item)
          ))
          .collect();
        format!("<div class=\"menu-items-container\">\n{}</div>", rows)
    };

    page(&escape_html(name.trim()), &body)
}

/// Page shown before anything has been generated
pub fn render_placeholder() -> String
{   page(
      "Restaurant Menu",
      "<div class=\"menu-empty\"><em>Select a cuisine and generate a menu to see it here.</em></div>"
    )
}
