use courtside::run;

fn main() -> anyhow::Result<()> {
    // One request at a time; a single-threaded runtime is all the pipeline needs.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run())
}
