//! Read-only smoke check against a running palabra-server, local or
//! deployed. Walks the banner, a random draw, its translation, and the
//! stats endpoint; never writes to the collections.

use clap::Parser;

#[derive(Parser)]
#[command(name = "palabra-probe", about = "Smoke check for a running palabra-server")]
struct Cli {
    /// Server to probe
    #[arg(long, default_value = "http://localhost:8000")]
    base_url: String,
}

fn get_json(url: &str) -> Result<serde_json::Value, String> {
    let mut resp = ureq::get(url)
        .call()
        .map_err(|e| format!("GET {} failed: {}", url, e))?;
    resp.body_mut()
        .read_json()
        .map_err(|e| format!("Bad JSON from {}: {}", url, e))
}

fn run(base: &str) -> Result<(), String> {
    let banner = get_json(&format!("{}/", base))?;
    println!("banner:      {}", banner["mensaje"]);

    let drawn = get_json(&format!("{}/palabra-random", base))?;
    let palabra = drawn["palabra"]
        .as_str()
        .ok_or_else(|| "random draw had no 'palabra' field".to_string())?
        .to_string();
    println!("random word: {}", palabra);

    // Words can carry spaces ("Pressure Point"), so encode the segment
    let translated = get_json(&format!("{}/traducir/{}", base, palabra.replace(' ', "%20")))?;
    println!("translation: {}", translated["traduccion"]);

    // A 404 here is fine; the collection may not carry this category
    match get_json(&format!("{}/palabra-random?categoria=animals", base)) {
        Ok(body) => println!("animals:     {}", body["palabra"]),
        Err(err) => println!("animals:     none available ({})", err),
    }

    let stats = get_json(&format!("{}/estadisticas", base))?;
    println!("total words: {}", stats["total_palabras"]);
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let base = cli.base_url.trim_end_matches('/').to_string();
    match run(&base) {
        Ok(()) => println!("all checks passed"),
        Err(err) => {
            eprintln!("probe failed: {}", err);
            std::process::exit(1);
        }
    }
}
