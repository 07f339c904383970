use royalty_core::error::RoyaltyError;
use royalty_core::model::ParsedStatement;

pub fn print(parsed: &ParsedStatement) -> Result<(), RoyaltyError> {
    let json = serde_json::to_string_pretty(parsed)?;
    println!("{json}");
    Ok(())
}
