use clap::Subcommand;
use std::path::PathBuf;
use ursinity_core::error::Result;
use ursinity_core::{ensure_persistent_data_dir, files, persistent_path};

#[derive(Subcommand)]
pub enum FilesAction {
    /// List the files in a directory
    List {
        dir: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Print a path anchored at the persistent data directory
    Path {
        path: PathBuf,
        /// Create the data directory first
        #[arg(long)]
        create: bool,
    },
    /// Print "true" if the file exists
    Exists { path: PathBuf },
    /// Delete a file
    Delete { path: PathBuf },
    /// Print the file name component of a path
    Name { path: PathBuf },
    /// Print the file size in bytes
    Size { path: PathBuf },
    /// Print the last modification time (RFC 3339)
    Modified { path: PathBuf },
    /// Print name, size and modification time
    Info {
        path: PathBuf,
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: FilesAction) -> Result<()> {
    match action {
        FilesAction::List { dir, json } => {
            let listed = files::try_list_files(&dir)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&listed)?);
            } else {
                for path in listed {
                    println!("{}", path.display());
                }
            }
        }
        FilesAction::Path { path, create } => {
            if create {
                ensure_persistent_data_dir()?;
            }
            println!("{}", persistent_path(path).display());
        }
        FilesAction::Exists { path } => println!("{}", files::try_file_exists(&path)?),
        FilesAction::Delete { path } => {
            files::try_delete_file(&path)?;
            println!("deleted {}", path.display());
        }
        FilesAction::Name { path } => println!("{}", files::try_file_name(&path)?),
        FilesAction::Size { path } => println!("{}", files::try_file_size(&path)?),
        FilesAction::Modified { path } => {
            println!("{}", files::try_last_modified(&path)?.to_rfc3339())
        }
        FilesAction::Info { path, json } => {
            let meta = files::try_file_metadata(&path)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&meta)?);
            } else {
                println!("Name:     {}", meta.name);
                println!("Size:     {} bytes", meta.size_bytes);
                println!("Modified: {}", meta.modified.format("%Y-%m-%d %H:%M:%S"));
            }
        }
    }
    Ok(())
}
