use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use gcloud_tts::{
    read_input_text, write_audio, Credentials, SynthesizeRequest, TtsClient,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_VOICE: &str = "en-US-Wavenet-H";
const DEFAULT_LANGUAGE: &str = "en-US";

#[derive(Parser, Debug)]
#[command(name = "gcloud-tts")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Convert text files to speech with the Google Cloud Text-to-Speech API")]
struct Args {
    /// Input text file to convert to speech
    #[arg(required_unless_present = "list_voices", conflicts_with = "list_voices")]
    input_file: Option<PathBuf>,

    /// Output MP3 file path
    #[arg(required_unless_present = "list_voices", conflicts_with = "list_voices")]
    output_file: Option<PathBuf>,

    /// List available voices and exit
    #[arg(long)]
    list_voices: bool,

    /// Voice name to use (default: en-US-Wavenet-H)
    #[arg(long, value_name = "NAME")]
    voice: Option<String>,

    /// Language code (default: en-US; with --list-voices, filters the catalog)
    #[arg(long, value_name = "CODE")]
    language: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let client = TtsClient::new(Credentials::from_env()?);

    if args.list_voices {
        list_voices(&client, args.language.as_deref()).await
    } else {
        // Both positionals are present once clap accepts the synthesize form.
        let input_file = args.input_file.expect("input file");
        let output_file = args.output_file.expect("output file");
        let voice = args.voice.as_deref().unwrap_or(DEFAULT_VOICE);
        let language = args.language.as_deref().unwrap_or(DEFAULT_LANGUAGE);
        synthesize(&client, &input_file, &output_file, voice, language).await
    }
}

async fn synthesize(
    client: &TtsClient,
    input_file: &std::path::Path,
    output_file: &std::path::Path,
    voice: &str,
    language: &str,
) -> Result<()> {
    let text = read_input_text(input_file)?;
    info!(voice, language, "synthesizing speech");

    let request = SynthesizeRequest::new(text, voice, language);
    let audio = client.synthesize(&request).await?;

    write_audio(output_file, &audio)?;
    println!(
        "Wrote {} bytes of MP3 audio to '{}'",
        audio.len(),
        output_file.display()
    );
    Ok(())
}

async fn list_voices(client: &TtsClient, language: Option<&str>) -> Result<()> {
    let voices = client.list_voices(language).await?;
    for voice in voices {
        println!("Name: {}", voice.name);
        println!("Languages: {}", voice.language_codes.join(", "));
        if let Some(gender) = &voice.ssml_gender {
            println!("Gender: {gender}");
        }
        println!("Natural Sample Rate: {} Hz", voice.natural_sample_rate_hertz);
        println!("{}", "-".repeat(60));
    }
    Ok(())
}
