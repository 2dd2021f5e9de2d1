use salary_scraper_lib::{
    collect_hh_stats, collect_sj_stats, logger, render_table, Config, HhClient, SuperJobClient,
    LANGUAGES,
};

use log::info;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    logger::init();

    // 1. Load Credentials (.env is optional, the variable itself is not)
    dotenv::dotenv().ok();
    let config = Config::from_env()?;

    // 2. Query SuperJob
    info!("Collecting SuperJob statistics for {} languages...", LANGUAGES.len());
    let sj_client = SuperJobClient::new(config.superjob_token);
    let sj_report = collect_sj_stats(&sj_client, &LANGUAGES)?;

    // 3. Query HeadHunter
    info!("Collecting HeadHunter statistics for {} languages...", LANGUAGES.len());
    let hh_client = HhClient::new();
    let hh_report = collect_hh_stats(&hh_client, &LANGUAGES)?;

    // 4. Print both tables, SuperJob first
    println!("{}", render_table(&sj_report));
    println!("{}", render_table(&hh_report));

    Ok(())
}
