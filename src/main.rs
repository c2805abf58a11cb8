use std::{error::Error, fs::File, io::BufReader, path::Path, sync::mpsc, thread};

use chime::{
    communication::{PlayRequest, PlaybackError, PlaybackFailure},
    Chime,
};
use eframe::{egui::ViewportBuilder, run_native};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

fn main() -> Result<(), Box<dyn Error>> {
    // initialize the logger
    simple_file_logger::init_logger!("chime").expect("couldn't initialize logger");

    let native_options = eframe::NativeOptions {
        viewport: ViewportBuilder::default().with_inner_size([420.0, 640.0]),
        ..Default::default()
    };

    let (request_tx, request_rx) = mpsc::channel();
    let (failure_tx, failure_rx) = mpsc::channel();
    thread::spawn(move || playback_loop(&request_rx, &failure_tx));

    // run the gui
    run_native(
        "Chime",
        native_options,
        Box::new(|_| Ok(Box::new(Chime::new(request_tx, failure_rx)))),
    )
    .map_err(std::convert::Into::into)
}

/// owns the audio output for the lifetime of the program
/// ends once the gui side drops its sender
fn playback_loop(
    requests: &mpsc::Receiver<PlayRequest>,
    failures: &mpsc::Sender<PlaybackFailure>,
) {
    // the stream must stay alive while any sink is attached to it
    let output = OutputStream::try_default();
    let handle = match &output {
        Ok((_stream, handle)) => Ok(handle),
        Err(e) => {
            log::error!("no audio output device: {e}");
            Err(e.to_string())
        }
    };
    while let Ok(PlayRequest { path }) = requests.recv() {
        let played = match &handle {
            Ok(handle) => play(handle, &path),
            Err(reason) => Err(PlaybackError::Device(reason.clone())),
        };
        if let Err(error) = played {
            log::error!("playback of {} failed: {error}", path.display());
            let _ = failures.send(PlaybackFailure { path, error });
        }
    }
}

/// decodes `path` and plays it on a detached sink, fire-and-forget
fn play(handle: &OutputStreamHandle, path: &Path) -> Result<(), PlaybackError> {
    let source = Decoder::new(BufReader::new(File::open(path)?))?;
    let sink = Sink::try_new(handle)?;
    sink.append(source);
    sink.detach();
    Ok(())
}
