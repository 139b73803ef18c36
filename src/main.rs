use clap::{Parser, ValueEnum};
use log::{debug, error, info};
use menu_designer::{
  render, ChatCompletionClient, CompletionConfig, MenuPipeline
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format
{   Html
  , Json
  , Text
}

#[derive(Parser)]
#[command(
  name = "menu-designer",
  version,
  about = "Generate a restaurant name and printable menu for a cuisine"
)]
struct Cli
{   /// Cuisine to design a menu for
    #[arg(long)]
    cuisine: Option<String>
  , /// Override the model identifier
    #[arg(long)]
    model: Option<String>
  , /// Override the sampling temperature
    #[arg(long)]
    temperature: Option<f32>
  , #[arg(long, value_enum, default_value_t = Format::Html)]
    format: Format
  , #[arg(long, default_value = "info")]
    log_level: String
}

#[tokio::main]
async fn main()
{   let cli = Cli::parse();
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(
      env_logger::Env::default().default_filter_or(cli.log_level.as_str())
    ).init();

    let mut config = match CompletionConfig::from_env()
    {   Ok(c) => c
      , Err(e) => {
          error!("{}", e);
          eprintln!("{}", e);
          std::process::exit(2);
        }
    };
    if let Some(model) = cli.model
    {   config.model = model;
    }
    if let Some(temperature) = cli.temperature
    {   config.temperature = temperature;
    }
    let policy = config.policy;

    let client = match ChatCompletionClient::new(config)
    {   Ok(c) => c
      , Err(e) => {
          error!("{}", e);
          eprintln!("{}", e);
          std::process::exit(2);
        }
    };

    info!(
      "Using model {} at {}",
      client.config().model,
      client.config().api_base
    );

    let Some(cuisine) = cli.cuisine
    else
    {   match cli.format
        {   Format::Html => print!("{}", render::render_placeholder())
          , _ => eprintln!("Pass --cuisine to generate a menu.")
        }
        return;
    };

    let pipeline = MenuPipeline::new(client, policy);
    let result = match pipeline.generate(&cuisine).await
    {   Ok(r) => r
      , Err(e) => {
          error!("Generation failed: {}", e);
          eprintln!("An error occurred while creating the menu: {}", e);
          std::process::exit(1);
        }
    };
    info!("Generated menu for: {}", result.name());

    let items = result.items();
    debug!("Parsed {} items", items.len());
    match cli.format
    {   Format::Html => {
          print!("{}", render::render_menu(result.name(), &items));
        }
      , Format::Json => {
          let out = serde_json::json!({
            "cuisine": cuisine,
            "background": render::background_for(&cuisine),
            "restaurant_name": result.name(),
            "menu_items": items,
          });
          println!("{}", out);
        }
      , Format::Text => {
          println!("{}", result.name());
          for (i, item) in items.iter().enumerate()
          {   println!("{}. {}", i + 1, item);
          }
        }
    }
}
