use std::rc::Rc;

use crate::config::Config;
use crate::events::{Dispatcher, Event, EventSink};
use crate::gallery::{Catalog, MountedGallery, WallpaperGallery};
use crate::loader::ResourceLoader;

use super::{CalendarWindow, Context, GalleryWindow, StatusBar};

use unsegen::base::Terminal;
use unsegen::input::{
    Event as InputEvent, Input, Key, NavigateBehavior, OperationResult, ScrollBehavior,
    Scrollable,
};
use unsegen::widget::*;

pub struct App<'a> {
    config: &'a Config,
    catalog: Catalog,
    context: Context,
    sink: EventSink,
    running: bool,
}

impl<'a> App<'a> {
    pub fn new(config: &'a Config, catalog: Catalog, context: Context, sink: EventSink) -> App<'a> {
        App {
            config,
            catalog,
            context,
            sink,
            running: true,
        }
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    fn as_widget<'w>(&'w self) -> impl Widget + 'w
    where
        'a: 'w,
    {
        let mut layout = VLayout::new();

        layout = match &self.context.gallery {
            Some(gallery) => layout.widget(GalleryWindow::new(&self.context, gallery.gallery())),
            None => layout.widget(CalendarWindow::new(&self.context)),
        };

        layout.widget(StatusBar::new(&self.context))
    }

    /// Mounts a fresh gallery and starts loading its images. Does nothing if
    /// one is already open.
    pub fn open_gallery(&mut self) {
        if self.context.gallery.is_some() {
            return;
        }

        self.context.gallery_generation += 1;
        let gallery = WallpaperGallery::new(self.catalog.clone())
            .mount(&self.context.document, Rc::new(self.sink.clone()));
        self.context.gallery = Some(gallery);

        ResourceLoader::new(
            &self.config.wallpaper_dir,
            self.sink.clone(),
            self.context.gallery_generation,
        )
        .load_all(&self.catalog);
    }

    pub fn close_gallery(&mut self) {
        if let Some(gallery) = self.context.gallery.take() {
            gallery.unmount();
        }
    }

    pub fn handle(&mut self, event: Event) {
        match event {
            Event::Update => self.context.update(),
            Event::Input(input) => self.handle_input(input),
            Event::ImageLoaded { gallery, id } => {
                if let Some(mounted) = self.current_gallery(gallery) {
                    mounted.gallery_mut().on_image_load(id);
                }
            }
            Event::ImageFailed { gallery, id } => {
                if let Some(mounted) = self.current_gallery(gallery) {
                    mounted.gallery_mut().on_image_error(id);
                }
            }
            Event::WallpaperSelected(src) => {
                log::info!("Desktop wallpaper set to '{}'", src);
                self.context.wallpaper = Some(src);
            }
            Event::DateSelected(date) => self.context.last_selected = Some(date),
            Event::CloseGallery => self.close_gallery(),
        }
    }

    fn current_gallery(&mut self, generation: u64) -> Option<&mut MountedGallery<EventSink>> {
        if generation != self.context.gallery_generation {
            log::debug!("Dropping image event of closed gallery {}", generation);
            return None;
        }
        self.context.gallery.as_mut()
    }

    fn handle_input(&mut self, input: Input) {
        if let InputEvent::Key(key) = &input.event {
            self.context.document.dispatch_key(key);
        }

        let mut open_gallery = false;
        let mut quit = false;

        let leftover = if let Some(gallery) = self.context.gallery.as_mut() {
            input
                .chain(
                    NavigateBehavior::new(gallery.gallery_mut())
                        .down_on(Key::Char('j'))
                        .up_on(Key::Char('k'))
                        .left_on(Key::Char('h'))
                        .right_on(Key::Char('l')),
                )
                .chain((Key::Char('\n'), || gallery.activate()))
                .chain((Key::Char('x'), || gallery.close()))
                .finish()
        } else {
            let today = self.context.today();
            let picker = &mut self.context.picker;
            input
                .chain((Key::Char('q'), || quit = true))
                .chain((Key::Char('w'), || open_gallery = true))
                .chain(
                    NavigateBehavior::new(&mut *picker)
                        .down_on(Key::Char('j'))
                        .up_on(Key::Char('k'))
                        .left_on(Key::Char('h'))
                        .right_on(Key::Char('l')),
                )
                .chain((Key::Char('\n'), || picker.activate()))
                .chain((Key::Char(' '), || picker.activate()))
                .chain((Key::Char('['), || picker.prev_month()))
                .chain((Key::Char(']'), || picker.next_month()))
                .chain((Key::Char('t'), || picker.show_month_of(today)))
                .finish()
        };

        if let Some(input) = leftover {
            input
                .chain(
                    ScrollBehavior::new(&mut DesktopScroll(&mut self.context))
                        .backwards_on(Key::PageUp)
                        .forwards_on(Key::PageDown),
                )
                .finish();
        }

        if quit {
            self.running = false;
        }
        if open_gallery {
            self.open_gallery();
        }
    }

    pub fn draw(&self, term: &mut Terminal) {
        let root = term.create_root_window();
        self.as_widget().draw(root, RenderingHints::new());
        term.present();
    }

    pub fn run(
        &mut self,
        dispatcher: Dispatcher,
        mut term: Terminal,
    ) -> Result<(), Box<dyn std::error::Error>> {
        while self.running {
            self.draw(&mut term);

            match dispatcher.next() {
                Ok(event) => self.handle(event),
                Err(e) => {
                    log::error!("Event channel closed: {}", e);
                    self.running = false;
                }
            }
        }

        self.close_gallery();

        Ok(())
    }
}

/// Scrolling the desktop behind any window flips through months, unless a
/// modal holds the scroll lock.
struct DesktopScroll<'a>(&'a mut Context);

impl Scrollable for DesktopScroll<'_> {
    fn scroll_backwards(&mut self) -> OperationResult {
        if self.0.document.is_scroll_locked() {
            log::debug!("Desktop scrolling is locked");
            return Err(());
        }
        self.0.picker.prev_month();
        Ok(())
    }

    fn scroll_forwards(&mut self) -> OperationResult {
        if self.0.document.is_scroll_locked() {
            log::debug!("Desktop scrolling is locked");
            return Err(());
        }
        self.0.picker.next_month();
        Ok(())
    }
}
