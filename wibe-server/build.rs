use vergen_git2::{BuildBuilder, Emitter, Git2Builder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Only the fields surfaced by `/version` are emitted.
    let git = Git2Builder::default()
        .sha(true)
        .branch(true)
        .describe(true, true, None)
        .commit_date(true)
        .dirty(false)
        .build()?;
    let build = BuildBuilder::default().build_timestamp(true).build()?;

    Emitter::default()
        .add_instructions(&git)?
        .add_instructions(&build)?
        .emit()?;

    Ok(())
}
