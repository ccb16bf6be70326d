//! Basic usage example

use gematria_api::{parse_numeral, render_numeral, Calculator, Config, ValuationScheme};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: Convenience functions
    println!("=== Method 1: Convenience Functions ===");
    let year = parse_numeral("ה'תשפ\"ה")?;
    println!("ה'תשפ\"ה = {year}");
    println!("{year} = {}\n", render_numeral(year as i64)?);

    // Method 2: Letter sums under every scheme
    println!("=== Method 2: Valuation Schemes ===");
    let calculator = Calculator::new();
    for scheme in ValuationScheme::ALL {
        println!("{scheme}: שלום = {}", calculator.sum_value_with("שלום", scheme)?);
    }

    // Method 3: Strict parsing
    println!("\n=== Method 3: Strict Mode ===");
    let strict = Calculator::with_config(Config::strict())?;
    match strict.parse_numeral("יצ") {
        Ok(value) => println!("יצ = {value}"),
        Err(err) => println!("יצ rejected: {err}"),
    }
    println!("רחצ = {}", strict.parse_numeral("רחצ")?);

    // Method 4: Custom separators
    println!("\n=== Method 4: Custom Separators ===");
    let config = Config::builder()
        .thousands_separator('׳')
        .tens_separator('״')
        .build()?;
    let calculator = Calculator::with_config(config)?;
    println!("5784 = {}", calculator.render_numeral(5784)?);

    Ok(())
}
