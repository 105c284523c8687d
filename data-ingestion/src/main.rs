use std::env;

use dotenv::dotenv;

pub mod actions;
pub mod services;

enum RefreshAction {
    Scales,
    Weighbridges,
    All,
}

impl RefreshAction {
    fn new(action: &str) -> Self {
        match action {
            "SCALES" => Self::Scales,
            "WEIGHBRIDGES" => Self::Weighbridges,
            "ALL" => Self::All,
            _ => panic!("Invalid action"),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let action: String = env::var("ACTION").unwrap_or_else(|_| "ALL".to_string());

    match RefreshAction::new(&action) {
        RefreshAction::Scales => {
            actions::refresh::refresh_scales().await?;
        }
        RefreshAction::Weighbridges => {
            actions::refresh::refresh_weighbridges().await?;
        }
        RefreshAction::All => actions::refresh::refresh_all().await?,
    }

    Ok(())
}
