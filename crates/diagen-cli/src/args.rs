//! Command-line argument definitions for the diagen CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the input file, diagram type and output
//! path, the listing mode, configuration file and logging verbosity.

use clap::Parser;

const AFTER_HELP: &str = "\
Supported diagram types include:
- graphviz: For directed/undirected graphs
- plantuml: For UML diagrams
- mermaid: For flowcharts, sequence diagrams, etc.
- blockdiag: For block diagrams
- bpmn: For business process diagrams
- bytefield: For network packet diagrams
- seqdiag: For sequence diagrams
- actdiag: For activity diagrams
- nwdiag: For network diagrams
- packetdiag: For packet diagrams
- rackdiag: For rack diagrams
- c4plantuml: For C4 model diagrams
- ditaa: For ASCII art diagrams
- erd: For entity relationship diagrams
- excalidraw: For hand-drawn style diagrams
- nomnoml: For UML diagrams
- pikchr: For diagrams
- structurizr: For software architecture diagrams
- svgbob: For ASCII to SVG diagrams
- vega: For data visualizations
- vegalite: For data visualizations
- wavedrom: For digital timing diagrams

Example usage:
    diagen graph.txt graphviz
    diagen sequence.txt plantuml my_diagram.svg
    diagen --list-formats";

/// Command-line arguments for the diagen tool
#[derive(Parser, Debug, Clone, Default)]
#[command(
    author,
    version,
    about = "Generate SVG diagrams from text files using Kroki",
    long_about = None,
    after_help = AFTER_HELP
)]
pub struct Args {
    /// Path to the text file containing diagram source code
    #[arg(required_unless_present = "list_formats")]
    pub input: Option<String>,

    /// Type of diagram (e.g., graphviz, plantuml, mermaid)
    #[arg(required_unless_present = "list_formats")]
    pub diagram_type: Option<String>,

    /// Output SVG file path (auto-generated if not provided)
    pub output: Option<String>,

    /// List all supported diagram types and their available formats
    #[arg(long)]
    pub list_formats: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
