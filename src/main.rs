// Tue Jan 13 2026 - Alex

use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let all_ok = exe_anatomy::ui::cli::run()?;
    Ok(if all_ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
