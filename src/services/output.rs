use crate::domain::models::{ErrorBody, JsonErrorOut, JsonOut};
use serde::Serialize;

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

pub fn print_failure(json: bool, code: &'static str, err: &anyhow::Error) {
    if json {
        let out = JsonErrorOut {
            ok: false,
            error: ErrorBody {
                code,
                message: format!("{err:#}"),
            },
        };
        match serde_json::to_string_pretty(&out) {
            Ok(rendered) => println!("{rendered}"),
            Err(_) => eprintln!("error: {err:#}"),
        }
    } else {
        eprintln!("error: {err:#}");
    }
}
