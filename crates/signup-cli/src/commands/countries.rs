use anyhow::Result;
use colored::Colorize;
use signup_countries::load_countries;
use signup_form::Config;

pub async fn execute(config: &Config) -> Result<()> {
    let directory = super::directory(config, false);
    let countries = load_countries(directory.as_ref()).await;

    if countries.is_empty() {
        println!("{}", "No countries available".yellow());
        return Ok(());
    }

    for country in &countries {
        if country.has_flag() {
            println!("{}  {}", country.display_name.bold(), country.flag_image_reference.dimmed());
        } else {
            println!("{}", country.display_name.bold());
        }
    }
    println!("\n{} countries", countries.len());

    Ok(())
}
