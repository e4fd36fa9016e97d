use crate::domain::models::JsonOut;
use serde::Serialize;

pub fn print_one<T: Serialize>(json: bool, data: T, line: impl Fn(&T) -> String) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", line(&data));
    }
    Ok(())
}

pub fn print_list<T: Serialize>(
    json: bool,
    data: &[T],
    line: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for item in data {
            println!("{}", line(item));
        }
    }
    Ok(())
}
