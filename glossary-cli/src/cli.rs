//! Command-line definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use glossary_core::types::ExportFormat;

#[derive(Parser, Debug)]
#[command(name = "glossary", version, about = "Personal glossary manager")]
pub struct Cli {
    /// Directory holding storage.json (overrides config and GLOSSARY_DATA_DIR)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Backend base URL (overrides config and GLOSSARY_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List glossaries
    List {
        /// Case-insensitive name filter
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Create a glossary
    Create {
        name: String,
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Rename a glossary and/or change its description
    Rename {
        name: String,
        new_name: String,
        /// New description (kept when omitted)
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Delete a glossary and its words
    Delete { name: String },

    /// List the words of a glossary
    Words {
        glossary: String,
        /// Case-insensitive filter on word and definition
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Add a word
    AddWord {
        glossary: String,
        word: String,
        definition: String,
        /// Comma-separated synonyms
        #[arg(short, long, value_delimiter = ',')]
        synonyms: Vec<String>,
    },

    /// Edit a word; omitted fields keep their value
    UpdateWord {
        glossary: String,
        word: String,
        #[arg(long)]
        new_word: Option<String>,
        #[arg(short, long)]
        definition: Option<String>,
        /// Comma-separated synonyms, replacing the current list
        #[arg(short, long, value_delimiter = ',')]
        synonyms: Option<Vec<String>>,
    },

    /// Delete a word
    DeleteWord { glossary: String, word: String },

    /// Export a glossary to a file
    Export {
        glossary: String,
        #[arg(short, long, value_enum, default_value_t = FormatArg::Json)]
        format: FormatArg,
        /// Destination path (defaults to the download directory)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Import a .json or .md glossary file
    Import { file: PathBuf },

    /// Ask the backend for synonyms of a word
    Suggest {
        glossary: String,
        word: String,
        /// Append the suggestions to the word's synonyms
        #[arg(long)]
        apply: bool,
    },

    /// Send a glossary's words to the export endpoint
    Push {
        glossary: String,
        /// Save a local JSON export when the request fails
        #[arg(long)]
        save_on_failure: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    #[value(alias = "md")]
    Markdown,
}

impl From<FormatArg> for ExportFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Json => Self::Json,
            FormatArg::Markdown => Self::Markdown,
        }
    }
}
