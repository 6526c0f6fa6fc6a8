use crate::models::FieldState;
use crate::validator::Field;
use crate::Result;
use colored::Colorize;

/// Validate values without touching the store
pub fn run(name: Option<&str>, phone: Option<&str>) -> Result<()> {
    let results: Vec<(Field, &str, FieldState)> = [(Field::Name, name), (Field::Phone, phone)]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v, FieldState::strict(field, v))))
        .collect();

    if results.is_empty() {
        anyhow::bail!("Nothing to check; pass --name and/or --phone");
    }

    let mut all_valid = true;
    for (field, value, state) in &results {
        if state.is_valid() {
            println!("   {} {} {:?}", state.symbol().green(), field.name(), value);
        } else {
            all_valid = false;
            println!(
                "   {} {} {:?}: expected {}",
                state.symbol().red(),
                field.name(),
                value,
                field.hint()
            );
        }
    }

    if !all_valid {
        anyhow::bail!("validation failed");
    }
    Ok(())
}
