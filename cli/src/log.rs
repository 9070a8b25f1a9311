use colored::Colorize;

const SPLASH: &str = r#"
    ███████╗ ██████╗ ██╗     ██╗  ██╗███████╗███╗   ██╗
    ██╔════╝██╔═══██╗██║     ╚██╗██╔╝██╔════╝████╗  ██║
    ███████╗██║   ██║██║      ╚███╔╝ █████╗  ██╔██╗ ██║
    ╚════██║██║   ██║██║      ██╔██╗ ██╔══╝  ██║╚██╗██║
    ███████║╚██████╔╝███████╗██╔╝ ██╗███████╗██║ ╚████║
    ╚══════╝ ╚═════╝ ╚══════╝╚═╝  ╚═╝╚══════╝╚═╝  ╚═══╝
"#;

/// Prints the start-up banner and a short description of the tool.
pub fn print_splash() {
    println!("{}", SPLASH.cyan().bold());
    println!("{}", "        solXEN Claim Check\n".yellow().bold());
    print_info("This tool checks for unclaimed solXEN points across four miners.");
    print_info("Enter a Solana address to see if there are any points available.");
    print_info("Press any key to continue...");
}

/// Prints a bold, prominent title for major sections of output.
pub fn print_title(text: &str) {
    println!("{}", format!("\n{}", text).bold());
}

/// Prints a plain informational message.
pub fn print_info(text: &str) {
    println!("{}", text);
}

/// Prints an empty line to separate sections of output.
pub fn print_divider() {
    println!();
}

/// Prints a highlighted section header with yellow bold text and surrounding markers.
pub fn print_section_header(text: &str) {
    println!("{}", format!("\n=== {} ===", text).yellow().bold());
}

/// Prints an informational message with a cyan arrow prefix for emphasis.
pub fn print_message(text: &str) {
    println!("{}", format!("→ {}", text).cyan());
}

/// Prints a count or metric with a blue diamond prefix for quantitative data.
pub fn print_count(text: &str) {
    println!("{}", format!("⟐ {}", text).blue());
}

/// Prints an error message with a red cross prefix to indicate failure.
pub fn print_error(text: &str) {
    println!("{}", format!("✗ {}", text).red());
}

/// Prints a red bold line that must not be missed.
pub fn print_highlight(text: &str) {
    println!("{}", format!("\n{}", text).red().bold());
}
