use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "staffdir",
    version,
    about = "terminal employee-directory browser",
    long_about = "Staffdir fetches a page of people from the randomuser API and renders them as a searchable card gallery with a paginated detail view.\n\nExamples:\n  staffdir\n  staffdir -n 24 --nat us,gb\n  staffdir -q mette --open 1\n\nTip: settings persist in ~/.staffdir/config.yml."
)]
pub struct CliArgs {
    #[arg(
        short = 'u',
        long = "url",
        value_name = "URL",
        help_heading = "Input",
        help = "Directory API endpoint (defaults to the randomuser API)."
    )]
    pub url: Option<String>,

    #[arg(
        short = 'n',
        long = "results",
        value_name = "N",
        help_heading = "Input",
        help = "Number of people to fetch."
    )]
    pub results: Option<u32>,

    #[arg(
        long = "nat",
        visible_alias = "nationalities",
        value_name = "CODES",
        help_heading = "Input",
        help = "Nationality codes for the fetched people (comma-separated)."
    )]
    pub nat: Option<String>,

    #[arg(
        short = 'C',
        long = "cfg",
        visible_alias = "config",
        value_name = "FILE",
        help_heading = "Input",
        help = "Path to config file (defaults to ~/.staffdir/config.yml)."
    )]
    pub config: Option<String>,

    #[arg(
        long = "timeout",
        value_name = "SECONDS",
        help_heading = "HTTP",
        help = "Request timeout in seconds."
    )]
    pub timeout: Option<usize>,

    #[arg(
        long = "proxy",
        value_name = "URL",
        help_heading = "HTTP",
        help = "Route the fetch through an HTTP proxy."
    )]
    pub proxy: Option<String>,

    #[arg(
        short = 'q',
        long = "query",
        value_name = "TEXT",
        help_heading = "Batch",
        help = "Render the gallery filtered by TEXT, then exit without the interactive prompt."
    )]
    pub query: Option<String>,

    #[arg(
        long = "open",
        value_name = "N",
        help_heading = "Batch",
        help = "Also open the detail view for card N before exiting (implies batch mode)."
    )]
    pub open: Option<usize>,

    #[arg(
        short = 'c',
        long = "clr",
        visible_alias = "color",
        help_heading = "Output",
        help = "Enable colored output (overrides --no-color)."
    )]
    pub color: bool,

    #[arg(
        long = "no-color",
        help_heading = "Output",
        help = "Disable colored output."
    )]
    pub no_color: bool,
}
