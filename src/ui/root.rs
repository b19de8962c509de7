//! Root view: input row, sample result and the backend button

use crate::constants::GREET_BUTTON_LABEL;
use crate::theme;
use crate::types::{Action, Widget};
use crate::ui::components::{InputOutput, InputView, ResultView};
use eframe::egui;

/// Result of one frame of [`RootView::show`]
pub struct RootOutput {
    pub action: Action,
    // Widget responses, kept so callers can locate what was drawn
    #[allow(dead_code)]
    pub input: InputOutput,
    #[allow(dead_code)]
    pub greet: egui::Response,
}

#[derive(Default)]
pub struct RootView {
    input: InputView,
    result: ResultView,
}

impl RootView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn describe(&self) -> Vec<Widget> {
        let mut widgets = self.input.describe();
        widgets.extend(self.result.describe());
        widgets.push(Widget::Button(GREET_BUTTON_LABEL));
        widgets
    }

    /// Draw the views. Only the backend button produces an action.
    pub fn show(&mut self, ui: &mut egui::Ui) -> RootOutput {
        let input = self.input.show(ui);
        ui.add_space(theme::SPACING_LG);
        self.result.show(ui);
        ui.add_space(theme::SPACING_LG);

        let greet = ui.add(theme::button(GREET_BUTTON_LABEL));
        let action = if greet.clicked() {
            Action::Greet
        } else {
            Action::None
        };

        RootOutput {
            action,
            input,
            greet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::SEND_ICON;

    /// Headless frame driver over a fixed-size screen
    struct Frames {
        ctx: egui::Context,
        view: RootView,
    }

    impl Frames {
        fn new() -> Self {
            Self {
                ctx: egui::Context::default(),
                view: RootView::new(),
            }
        }

        fn run(&mut self, events: Vec<egui::Event>) -> (RootOutput, egui::FullOutput) {
            let input = egui::RawInput {
                screen_rect: Some(egui::Rect::from_min_size(
                    egui::Pos2::ZERO,
                    egui::vec2(800.0, 600.0),
                )),
                events,
                ..Default::default()
            };
            let mut output = None;
            let view = &mut self.view;
            let full = self.ctx.run(input, |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    output = Some(view.show(ui));
                });
            });
            (output.expect("root view was shown"), full)
        }

        /// Press and release over `pos`, returning the actions of the
        /// press and release frames.
        fn click(&mut self, pos: egui::Pos2) -> Vec<Action> {
            let press = vec![
                egui::Event::PointerMoved(pos),
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed: true,
                    modifiers: egui::Modifiers::NONE,
                },
            ];
            let release = vec![egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed: false,
                modifiers: egui::Modifiers::NONE,
            }];
            vec![self.run(press).0.action, self.run(release).0.action]
        }

        fn greet_pos(&mut self) -> egui::Pos2 {
            self.run(Vec::new()).0.greet.rect.center()
        }

        fn send_pos(&mut self) -> egui::Pos2 {
            let out = self.run(Vec::new()).0;
            out.input.send.expect("send button drawn").rect.center()
        }

        fn field_pos(&mut self) -> egui::Pos2 {
            let out = self.run(Vec::new()).0;
            out.input.field.expect("text field drawn").rect.center()
        }
    }

    fn collect_text(shape: &egui::Shape, out: &mut Vec<String>) {
        match shape {
            egui::Shape::Text(text) => out.push(text.galley.text().to_owned()),
            egui::Shape::Vec(shapes) => shapes.iter().for_each(|s| collect_text(s, out)),
            _ => {}
        }
    }

    /// Non-empty text painted during a frame, in paint order
    fn painted_text(full: &egui::FullOutput) -> Vec<String> {
        let mut out = Vec::new();
        for clipped in &full.shapes {
            collect_text(&clipped.shape, &mut out);
        }
        out.retain(|t| !t.is_empty());
        out
    }

    fn greet_count(actions: &[Action]) -> usize {
        actions.iter().filter(|a| **a == Action::Greet).count()
    }

    #[test]
    fn root_view_structure() {
        let view = RootView::new();
        assert_eq!(
            view.describe(),
            vec![
                Widget::TextInput,
                Widget::IconButton(SEND_ICON),
                Widget::TextLine("uinput ]=> (+ 1 2)".to_string()),
                Widget::TextLine("answer]=> 3".to_string()),
                Widget::Button("from my scheme backend"),
            ]
        );
    }

    #[test]
    fn painted_frame_matches_description() {
        let mut frames = Frames::new();
        let (out, full) = frames.run(Vec::new());

        // Every text-bearing widget in the description is painted once, in order
        let expected: Vec<String> = frames
            .view
            .describe()
            .into_iter()
            .filter_map(|w| match w {
                Widget::TextInput => None,
                Widget::IconButton(icon) => Some(icon.to_string()),
                Widget::TextLine(line) => Some(line),
                Widget::Button(label) => Some(label.to_string()),
            })
            .collect();
        assert_eq!(painted_text(&full), expected);

        // The single text field is drawn and takes clicks
        let field = out.input.field.expect("text field drawn");
        assert!(field.rect.area() > 0.0);
        assert!(field.sense.senses_click());
        let send = out.input.send.expect("send button drawn");
        assert!(send.rect.area() > 0.0);
        assert!(out.greet.rect.area() > 0.0);
    }

    #[test]
    fn rendering_without_input_produces_no_action() {
        let mut frames = Frames::new();
        let before = frames.view.describe();
        assert_eq!(frames.run(Vec::new()).0.action, Action::None);
        assert_eq!(frames.run(Vec::new()).0.action, Action::None);
        assert_eq!(frames.view.describe(), before);
    }

    #[test]
    fn each_greet_click_yields_one_greet() {
        let mut frames = Frames::new();
        let pos = frames.greet_pos();

        assert_eq!(greet_count(&frames.click(pos)), 1);
        assert_eq!(greet_count(&frames.click(pos)), 1);
        // Settled frame afterwards emits nothing
        assert_eq!(frames.run(Vec::new()).0.action, Action::None);
    }

    #[test]
    fn send_click_yields_no_action_and_same_output() {
        let mut frames = Frames::new();
        let (_, before_full) = frames.run(Vec::new());
        let before = frames.view.describe();
        let pos = frames.send_pos();

        let actions = frames.click(pos);
        assert!(actions.iter().all(|a| *a == Action::None));

        let (_, after_full) = frames.run(Vec::new());
        assert_eq!(frames.view.describe(), before);
        assert_eq!(painted_text(&after_full), painted_text(&before_full));
    }

    #[test]
    fn typing_into_focused_field_emits_no_action() {
        let mut frames = Frames::new();
        let before = frames.view.describe();
        let pos = frames.field_pos();

        let actions = frames.click(pos);
        assert!(actions.iter().all(|a| *a == Action::None));

        let (out, _) = frames.run(vec![egui::Event::Text("(* 6 7)".to_string())]);
        assert_eq!(out.action, Action::None);
        assert_eq!(frames.view.input.draft(), "(* 6 7)");

        let (out, _) = frames.run(vec![egui::Event::Key {
            key: egui::Key::Enter,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }]);
        assert_eq!(out.action, Action::None);
        assert_eq!(frames.view.input.draft(), "(* 6 7)");
        assert_eq!(frames.view.describe(), before);
    }
}
