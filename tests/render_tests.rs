use menu_designer::render::{
  background_for, escape_html, known_cuisines, render_menu,
  render_placeholder, DEFAULT_BACKGROUND
};
use menu_designer::GenerationResult;

#[test]
fn test_menu_numbers_items_from_one()
{   let html = render_menu(
      "  Trattoria Stella\n",
      &["Margherita Pizza", "  ", "Tiramisu "]
    );
    assert!(html.contains("<div class=\"menu-title\">Trattoria Stella</div>"));
    assert!(html.contains("<div class=\"menu-item\">1. Margherita Pizza</div>"));
    assert!(html.contains("<div class=\"menu-item\">2. Tiramisu</div>"));
    assert_eq!(html.matches("class=\"menu-item\"").count(), 2);
    assert!(html.contains("<title>Trattoria Stella</title>"));
}

#[test]
fn test_model_text_is_escaped()
{   let html = render_menu(
      "<script>alert(1)</script>",
      &["Fish & Chips", "\"Special\" <b>stew</b>"]
    );
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(html.contains("1. Fish &amp; Chips"));
    assert!(html.contains("2. &quot;Special&quot; &lt;b&gt;stew&lt;/b&gt;"));
    assert_eq!(escape_html("it's"), "it&#39;s");
}

#[test]
fn test_empty_menu_renders_notice()
{   let items: Vec<String> = vec![];
    let html = render_menu("Quiet Corner", &items);
    assert!(html.contains("No menu items were suggested."));
    assert!(!html.contains("class=\"menu-item\""));
}

#[test]
fn test_generated_result_renders()
{   let result = GenerationResult
    {   restaurant_name: "Sakura House".to_string()
      , menu_items: "1. Miso Soup 2. Salmon Nigiri".to_string()
    };
    let html = render_menu(result.name(), &result.items());
    assert!(html.contains("1. Miso Soup"));
    assert!(html.contains("2. Salmon Nigiri"));
}

#[test]
fn test_placeholder_page()
{   let html = render_placeholder();
    assert!(html.contains("<div class=\"menu-title\">Restaurant Menu</div>"));
    assert!(html.contains("Select a cuisine"));
    assert!(html.contains(
      "place-setting-shot-directly-above.jpg?s=612x612&w=0&k=20\
       &c=ATOlj0zxYlFCJvLMhBawvAzdaJWuSl0WKPAU4V94JPc="
    ));
}

#[test]
fn test_background_lookup()
{   assert_eq!(
      background_for("italian"),
      "https://images.unsplash.com/photo-1551183053-bf91a1d81141"
    );
    assert_eq!(
      background_for(" Japanese "),
      "https://images.unsplash.com/photo-1569308027668-30948e5898d0"
    );
    assert_eq!(background_for("Peruvian"), DEFAULT_BACKGROUND);
    assert_eq!(known_cuisines().count(), 7);
}
