use crate::cli::NumeralCommands;
use crate::domain::models::ConversionItem;
use crate::services::numeral;
use crate::services::output::print_list;

pub fn handle_numeral_commands(json: bool, command: &NumeralCommands) -> anyhow::Result<()> {
    let items = match command {
        NumeralCommands::ToRoman { values } => {
            let mut out = Vec::new();
            for value in numeral::split_values(values)? {
                let converted = numeral::to_roman(numeral::parse_arabic(&value)?)?;
                out.push(ConversionItem {
                    input: value,
                    output: converted,
                });
            }
            out
        }
        NumeralCommands::ToArabic { values } => {
            let mut out = Vec::new();
            for value in numeral::split_values(values)? {
                let converted = numeral::to_arabic(&value)?.to_string();
                out.push(ConversionItem {
                    input: value,
                    output: converted,
                });
            }
            out
        }
    };
    print_list(json, &items, |item| {
        format!("{}\t{}", item.input, item.output)
    })
}
