use clap::Parser;
use song_studio::utils::error::with_error_logging;
use song_studio::utils::logger;
use song_studio::utils::validation::{validate_request, Validate};
use song_studio::{
    handle_api_error, ApiResponse, ArtRequest, CliConfig, SongRequest, SongService, SongStudio,
    TokioSleeper,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting song-studio CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let studio = SongStudio::new(TokioSleeper, config.clone());

    let song_response = run_create_song(&studio, &config).await;
    println!("{}", serde_json::to_string_pretty(&song_response)?);

    let mut failed = !song_response.is_ok();

    if config.with_art {
        let art_response = run_create_album_art(&studio, &config).await;
        println!("{}", serde_json::to_string_pretty(&art_response)?);
        failed = failed || !art_response.is_ok();
    }

    if failed {
        std::process::exit(1);
    }

    tracing::info!("✅ Done");
    Ok(())
}

async fn run_create_song<S: SongService>(
    studio: &S,
    config: &CliConfig,
) -> ApiResponse<song_studio::SongResult> {
    let outcome = with_error_logging("create_song", async {
        let request = validate_request(
            SongRequest {
                title: config.title.clone(),
                description: config.description.clone(),
                style: config.style.clone(),
            },
            |r| r.validate().is_ok(),
        )?;
        studio.create_song(&request).await
    })
    .await;

    match outcome {
        Ok(result) => ApiResponse::ok(result),
        Err(e) => handle_api_error(&e),
    }
}

async fn run_create_album_art<S: SongService>(
    studio: &S,
    config: &CliConfig,
) -> ApiResponse<song_studio::AlbumArtResult> {
    let outcome = with_error_logging("create_album_art", async {
        let request = ArtRequest {
            description: config.description.clone(),
            style: config.style.clone(),
        };
        studio.create_album_art(&request).await
    })
    .await;

    match outcome {
        Ok(result) => ApiResponse::ok(result),
        Err(e) => handle_api_error(&e),
    }
}
