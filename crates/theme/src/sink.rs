/// Where the observer publishes the theme.
///
/// The browser implementation writes classes and attributes on the root
/// element; tests and tools record the calls.
pub trait ThemeSink {
    fn set_theme(&mut self, is_light: bool);
    fn set_animating(&mut self, animating: bool);
}

impl<S: ThemeSink + ?Sized> ThemeSink for &mut S {
    fn set_theme(&mut self, is_light: bool) {
        (**self).set_theme(is_light);
    }

    fn set_animating(&mut self, animating: bool) {
        (**self).set_animating(animating);
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Theme { is_light: bool },
    Animating(bool),
}

/// Sink that keeps every call in order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingThemeSink {
    pub events: Vec<SinkEvent>,
    pub is_light: bool,
    pub animating: bool,
}

impl RecordingThemeSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn theme_changes(&self) -> Vec<bool> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SinkEvent::Theme { is_light } => Some(*is_light),
                SinkEvent::Animating(_) => None,
            })
            .collect()
    }
}

impl ThemeSink for RecordingThemeSink {
    fn set_theme(&mut self, is_light: bool) {
        self.is_light = is_light;
        self.events.push(SinkEvent::Theme { is_light });
    }

    fn set_animating(&mut self, animating: bool) {
        self.animating = animating;
        self.events.push(SinkEvent::Animating(animating));
    }
}
