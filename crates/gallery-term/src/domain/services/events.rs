use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use crossterm::event::EventStream;
use crossterm::event::KeyCode;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseEventKind;
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time;

use crate::domain::models::Event;

pub struct EventsService {
    crossterm_events: EventStream,
    events: mpsc::UnboundedReceiver<Event>,
}

impl EventsService {
    pub fn new(events: mpsc::UnboundedReceiver<Event>) -> EventsService {
        return EventsService {
            crossterm_events: EventStream::new(),
            events,
        };
    }

    pub fn handle_crossterm(event: CrosstermEvent) -> Option<Event> {
        match event {
            CrosstermEvent::Mouse(mouseevent) => match mouseevent.kind {
                MouseEventKind::ScrollUp => {
                    return Some(Event::UIScrollUp);
                }
                MouseEventKind::ScrollDown => {
                    return Some(Event::UIScrollDown);
                }
                _ => {
                    return None;
                }
            },
            CrosstermEvent::Key(keyevent) => {
                if keyevent.kind == KeyEventKind::Release {
                    return None;
                }

                let ctrl = keyevent.modifiers.contains(KeyModifiers::CONTROL);
                match keyevent.code {
                    KeyCode::Char('c') if ctrl => {
                        return Some(Event::KeyboardCTRLC);
                    }
                    KeyCode::Char(c) => {
                        return Some(Event::KeyboardChar(c));
                    }
                    KeyCode::Enter => {
                        return Some(Event::KeyboardEnter);
                    }
                    KeyCode::Tab => {
                        return Some(Event::KeyboardTab);
                    }
                    KeyCode::Delete | KeyCode::Backspace => {
                        return Some(Event::KeyboardDelete);
                    }
                    KeyCode::Up => {
                        return Some(Event::UIScrollUp);
                    }
                    KeyCode::Down => {
                        return Some(Event::UIScrollDown);
                    }
                    _ => return None,
                }
            }
            _ => return None,
        }
    }

    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let evt = tokio::select! {
                event = self.events.recv() => event,
                event = self.crossterm_events.next() => match event {
                    Some(Ok(input)) => EventsService::handle_crossterm(input),
                    Some(Err(_)) => None,
                    None => None
                },
                _ = time::sleep(time::Duration::from_millis(500)) => Some(Event::UITick)
            };

            if let Some(event) = evt {
                return Ok(event);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEvent;

    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> CrosstermEvent {
        return CrosstermEvent::Key(KeyEvent::new(code, modifiers));
    }

    #[test]
    fn it_maps_ctrl_c_before_plain_chars() {
        assert!(matches!(
            EventsService::handle_crossterm(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Event::KeyboardCTRLC)
        ));
        assert!(matches!(
            EventsService::handle_crossterm(key(KeyCode::Char('c'), KeyModifiers::NONE)),
            Some(Event::KeyboardChar('c'))
        ));
    }

    #[test]
    fn it_maps_navigation_keys() {
        assert!(matches!(
            EventsService::handle_crossterm(key(KeyCode::Backspace, KeyModifiers::NONE)),
            Some(Event::KeyboardDelete)
        ));
        assert!(matches!(
            EventsService::handle_crossterm(key(KeyCode::Down, KeyModifiers::NONE)),
            Some(Event::UIScrollDown)
        ));
        assert!(EventsService::handle_crossterm(key(KeyCode::F(2), KeyModifiers::NONE)).is_none());
    }
}
