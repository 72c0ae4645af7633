use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Build the WHERE clause for a filter definition file
    Build {
        #[arg(long, help = "Filter definition file path (JSON)")]
        config: String,

        #[arg(long, help = "Reset every filter to its defaults before aggregating")]
        reset: bool,

        #[arg(long, help = "Print the clause and parameters as JSON")]
        json: bool,

        #[arg(
            long,
            help = "If specified, writes the output to this file instead of stdout"
        )]
        output: Option<String>,
    },
    /// List the comparison modes valid for a value kind
    Modes {
        /// Value kind: "boolean", "date", "number", "text", "number_list", "text_list"
        #[arg(long)]
        kind: String,

        #[arg(long, help = "Include the null checks offered to null-sensitive columns")]
        null_sensitive: bool,
    },
}
