use anyhow::Result;
use clap::{Parser, Subcommand};
use gitlore::areas::repository::Repository;
use gitlore::artifacts::log::rev_list::RevList;

#[derive(Parser)]
#[command(
    name = "gitlore",
    version = "0.1.0",
    about = "A read-only reader for the git loose-object store",
    long_about = "Reads a git repository without ever writing to it: lists the \
    tree of a branch tip, walks commit ancestry, and prints decoded objects. \
    Run with no arguments to list the first branch's tree and full history.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "ls-tree",
        about = "List the tree entries of a commit",
        long_about = "This command resolves a branch name or commit id and prints \
        every entry of the commit's tree as `mode id name`."
    )]
    LsTree {
        #[arg(index = 1, help = "Branch name or commit id")]
        commitish: String,
    },
    #[command(
        name = "rev-list",
        about = "Print the ancestry of a commit",
        long_about = "This command walks parent links depth-first from the given \
        commit and prints each visited commit id on its own line."
    )]
    RevList {
        #[arg(index = 1, help = "Branch name or commit id")]
        commitish: String,
    },
    #[command(
        name = "cat-file",
        about = "Print the decoded body of an object",
        long_about = "This command inflates the object, strips its header and \
        prints the body."
    )]
    CatFile {
        #[arg(index = 1, help = "Branch name or object id")]
        id: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let pwd = std::env::current_dir()?;
    let repository = Repository::discover(&pwd)?;

    match &cli.command {
        None => default_run(&repository)?,
        Some(Commands::LsTree { commitish }) => ls_tree(&repository, commitish)?,
        Some(Commands::RevList { commitish }) => rev_list(&repository, commitish)?,
        Some(Commands::CatFile { id }) => cat_file(&repository, id)?,
    }

    Ok(())
}

/// Tree listing plus full ancestry of the first branch, then a success
/// marker.
fn default_run(repository: &Repository) -> Result<()> {
    let branches = repository.refs().list_branches()?;
    let branch = branches
        .first()
        .ok_or_else(|| anyhow::anyhow!("no branches under refs/heads"))?;

    ls_tree(repository, branch)?;
    rev_list(repository, branch)?;
    println!("ok");

    Ok(())
}

fn ls_tree(repository: &Repository, commitish: &str) -> Result<()> {
    let oid = repository.refs().resolve_commitish(commitish)?;
    let commit = repository.database().parse_commit(&oid)?;
    let tree = repository.database().parse_tree(commit.tree_oid())?;

    for entry in tree.entries() {
        println!("{} {} {}", entry.mode, entry.oid, entry.name);
    }

    Ok(())
}

fn rev_list(repository: &Repository, commitish: &str) -> Result<()> {
    let oid = repository.refs().resolve_commitish(commitish)?;

    for commit in RevList::new(repository, oid) {
        println!("{}", commit?.id());
    }

    Ok(())
}

fn cat_file(repository: &Repository, id: &str) -> Result<()> {
    let oid = repository.refs().resolve_commitish(id)?;
    let (_, body) = repository.database().load_body(&oid)?;
    print!("{}", String::from_utf8_lossy(&body));

    Ok(())
}
