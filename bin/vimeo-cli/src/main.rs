use std::path::PathBuf;

use clap::{Parser, Subcommand};

const CHUNK_SIZE: u64 = 1024 * 1024;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(short, long)]
    debug: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// upload files as new clips
    Upload {
        files: Vec<PathBuf>,
        #[arg(long, default_value = "video/mp4")]
        content_type: String,
    },
    /// print a clip's metadata
    Video { clip_id: u64 },
    /// delete clips by id
    Delete { clip_id: Vec<u64> },
    /// print the authenticated account
    Me,
}

use vimeo::{prelude::*, upload::UploadParam, *};

struct Bar(indicatif::ProgressBar);

impl upload::Progress for Bar {
    fn started(&self, total: u64) {
        self.0.set_length(total);
    }

    fn verified(&self, bytes: u64) {
        self.0.set_position(bytes);
    }

    fn done(&self) {
        self.0.finish();
    }
}

fn main() {
    let cli = Cli::parse();
    if cli.debug {
        tracing_subscriber::fmt()
            .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
            .init();
    }
    let rt = tokio::runtime::Runtime::new().expect("init tokio failed");
    rt.block_on(async move { anyhow_run(cli).await })
        .expect("vc failed!");
}

async fn anyhow_run(cli: Cli) -> anyhow::Result<()> {
    let token = std::env::var("VIMEO_ACCESS_TOKEN")
        .map_err(|_| anyhow::anyhow!("VIMEO_ACCESS_TOKEN is not set"))?;
    let s = std::sync::Arc::new(Service::new(token));

    match cli.command {
        Commands::Upload {
            files,
            content_type,
        } => {
            let bars = indicatif::MultiProgress::new();
            let mut fg = tokio::task::JoinSet::new();
            for path in files {
                let s = s.clone();
                let content_type = content_type.clone();
                let bar = bars.add(indicatif::ProgressBar::new(0));
                bar.set_message(path.display().to_string());
                fg.spawn(async move {
                    let mut content = BinaryContent::from_file(&path, &content_type).await?;
                    let done = s
                        .upload_entire_content_with(
                            &mut content,
                            &UploadParam {
                                chunk_size: Some(CHUNK_SIZE),
                                max_retries: None,
                            },
                            &Bar(bar),
                        )
                        .await?;
                    println!(
                        "upload finish for: {} -> clip {}",
                        path.display(),
                        done.clip_uri().as_deref().unwrap_or("?")
                    );
                    Ok::<(), vimeo::Error>(())
                });
            }
            while let Some(f) = fg.join_next().await {
                f??;
            }
        }
        Commands::Video { clip_id } => match s.get_video(clip_id, None).await? {
            Some(video) => println!("{:#?}", video),
            None => println!("clip {} not found", clip_id),
        },
        Commands::Delete { clip_id } => {
            for id in clip_id {
                s.delete_video(id).await?;
                println!("deleted clip {}", id);
            }
        }
        Commands::Me => {
            let account = s.get_account_information().await?;
            println!("{:#?}", account);
        }
    }
    Ok(())
}
