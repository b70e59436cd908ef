use std::cell::RefCell;
use std::time::Duration;

use byeol_core::{Constellation, params};
use byeol_render::surface_bounds;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{DefaultTerminal, Frame, layout::Rect};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let terminal = ratatui::init();
    let result = App::new().run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// The particle field, behind a `RefCell` for the canvas paint closure.
    constellation: RefCell<Constellation>,
    /// Random source for particle spawns and respawns.
    rng: RefCell<StdRng>,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new() -> Self {
        Self {
            running: false,
            constellation: RefCell::new(Constellation::new()),
            rng: RefCell::new(StdRng::from_entropy()),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        // Populate once against the startup size. Later resizes never
        // repopulate: stranded particles drift back into the new bounds
        // through the normal reflection rule.
        let size = terminal.size()?;
        let bounds = surface_bounds(Rect::new(0, 0, size.width, size.height));
        self.constellation.borrow_mut().populate(
            params::PARTICLE_COUNT,
            bounds,
            &mut *self.rng.borrow_mut(),
        );

        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Renders one animation frame.
    fn render(&mut self, frame: &mut Frame) {
        byeol_render::render(frame, &self.constellation, &self.rng);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with timeout to keep the animation ticking.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        // ~60 ticks per second
        if event::poll(Duration::from_millis(16))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(_) => {}
                // The next draw reads the new terminal area.
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            _ => {}
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
