use clap::Args;

#[derive(Args, Debug)]
pub struct BenchmarkArgs {
    #[arg(short, long, required = true, help = "Path to FASTA file holding the strands.")]
    pub assembly: String,

    #[arg(short, long, required = true, help = "Path to output tsv file.")]
    pub output: String,

    #[arg(short, long, required = true, help = "Pattern cut out of every strand. Example: '-e GAATTC'")]
    pub enzyme: String,

    #[arg(
        long,
        default_value_t = 4096,
        help = "Length of the smallest splicee. Doubled until it exceeds --max-splicee."
    )]
    pub min_splicee: usize,

    #[arg(long, default_value_t = 524288, help = "Upper bound for the splicee length.")]
    pub max_splicee: usize,

    #[arg(short, long, default_value_t = 1)]
    pub threads: usize,
}
