use crate::config;
use crate::gallery::{GalleryHandler, WallpaperId};
use chrono::NaiveDate;
use nix::sys::signal::SigSet;
use std::io;
use std::sync::mpsc;
use std::thread;

use unsegen::input::Input;

use config::Config;

pub enum Event {
    Input(Input),
    Update,
    ImageLoaded { gallery: u64, id: WallpaperId },
    ImageFailed { gallery: u64, id: WallpaperId },
    WallpaperSelected(String),
    DateSelected(NaiveDate),
    CloseGallery,
}

pub type EventSink = mpsc::Sender<Event>;

impl GalleryHandler for EventSink {
    fn select_wallpaper(&self, src: &str) {
        if self.send(Event::WallpaperSelected(src.to_owned())).is_err() {
            log::warn!("Dropped wallpaper selection '{}': event loop is gone", src);
        }
    }

    fn close_window(&self) {
        if self.send(Event::CloseGallery).is_err() {
            log::warn!("Dropped close request: event loop is gone");
        }
    }
}

pub struct Dispatcher {
    rx: mpsc::Receiver<Event>,
    tx: EventSink,
    _input_handle: thread::JoinHandle<()>,
    _update_handle: thread::JoinHandle<()>,
    _signal_handle: thread::JoinHandle<()>,
}

impl Dispatcher {
    /// Spawns the input, tick and signal threads. `signals` are blocked for
    /// the calling thread (and so for every thread spawned afterwards) and
    /// turned into redraws.
    pub fn from_config(config: &Config, signals: SigSet) -> Dispatcher {
        let tick_rate = config.tick_rate();
        let (tx, rx) = mpsc::channel();

        if let Err(e) = signals.thread_block() {
            log::warn!("Unable to block signals: {}", e);
        }

        let input_handle = {
            let tx = tx.clone();
            thread::spawn(move || {
                let stdin = io::stdin();
                let stdin = stdin.lock();
                for evt in Input::read_all(stdin) {
                    match evt {
                        Ok(key) => {
                            if tx.send(Event::Input(key)).is_err() {
                                return;
                            }
                        }
                        Err(e) => log::warn!("Unable to read input: {}", e),
                    }
                }
            })
        };
        let update_handle = {
            let tx = tx.clone();
            thread::spawn(move || loop {
                if tx.send(Event::Update).is_err() {
                    return;
                }
                thread::sleep(tick_rate);
            })
        };
        let signal_handle = {
            let tx = tx.clone();
            thread::spawn(move || loop {
                match signals.wait() {
                    Ok(signal) => {
                        log::debug!("Received {}", signal);
                        if tx.send(Event::Update).is_err() {
                            return;
                        }
                    }
                    Err(e) => {
                        log::warn!("Stopped waiting for signals: {}", e);
                        return;
                    }
                }
            })
        };
        Dispatcher {
            rx,
            tx,
            _input_handle: input_handle,
            _update_handle: update_handle,
            _signal_handle: signal_handle,
        }
    }

    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }

    pub fn event_sink(&self) -> &EventSink {
        &self.tx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sink_forwards_gallery_callbacks() {
        let (tx, rx) = mpsc::channel::<Event>();

        tx.select_wallpaper("wallpaper3.jpg");
        tx.close_window();

        assert!(matches!(
            rx.try_recv(),
            Ok(Event::WallpaperSelected(src)) if src == "wallpaper3.jpg"
        ));
        assert!(matches!(rx.try_recv(), Ok(Event::CloseGallery)));
    }

    #[test]
    fn closed_sink_does_not_panic() {
        let (tx, rx) = mpsc::channel::<Event>();
        drop(rx);
        tx.close_window();
    }
}
