use clap::Args;

#[derive(Args, Debug)]
pub struct SpliceArgs {
    #[arg(short, long, required = true, help = "Path to FASTA file holding the strands.")]
    pub assembly: String,

    #[arg(short, long, required = true, help = "Path to output FASTA file (.fasta or .fa).")]
    pub output: String,

    #[arg(
        short,
        long,
        help = "Pattern cut out of every strand. Example: '-e GAATTC'"
    )]
    pub enzyme: Option<String>,

    #[arg(
        short,
        long,
        default_value = "",
        help = "Sequence spliced in where the enzyme was cut."
    )]
    pub splicee: String,

    #[arg(long, help = "Reverse every strand after splicing.")]
    pub reverse: bool,
}
