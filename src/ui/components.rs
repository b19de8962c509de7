//! Reusable UI components
//!
//! Each view can both draw itself and describe what it draws as a list of
//! [`Widget`]s.

use crate::constants::{EXPRESSION_PROMPT, RESULT_PROMPT, SAMPLE_EXPRESSION, SAMPLE_RESULT};
use crate::theme;
use crate::types::Widget;
use eframe::egui;
use egui_extras::{Size, StripBuilder};

pub const SEND_ICON: &str = egui_phosphor::regular::PAPER_PLANE_TILT;

/// Responses from one frame of [`InputView::show`]
#[allow(dead_code)]
pub struct InputOutput {
    pub field: Option<egui::Response>,
    pub send: Option<egui::Response>,
}

/// Text field with a send button. Neither is wired to a handler.
#[derive(Default)]
pub struct InputView {
    // Typed text lands here and is never read, like an uncontrolled input
    draft: String,
}

impl InputView {
    pub fn describe(&self) -> Vec<Widget> {
        vec![Widget::TextInput, Widget::IconButton(SEND_ICON)]
    }

    #[cfg(test)]
    pub(crate) fn draft(&self) -> &str {
        &self.draft
    }

    pub fn show(&mut self, ui: &mut egui::Ui) -> InputOutput {
        let draft = &mut self.draft;
        let mut field = None;
        let mut send = None;
        ui.allocate_ui(
            egui::vec2(ui.available_width(), theme::INPUT_ROW_HEIGHT),
            |ui| {
                StripBuilder::new(ui)
                    .size(Size::remainder())
                    .size(Size::exact(theme::SEND_BUTTON_WIDTH))
                    .horizontal(|mut strip| {
                        strip.cell(|ui| {
                            field = Some(ui.add(
                                egui::TextEdit::singleline(draft)
                                    .font(egui::TextStyle::Monospace)
                                    .desired_width(f32::INFINITY),
                            ));
                        });
                        strip.cell(|ui| {
                            send = Some(ui.add(
                                theme::button_accent(SEND_ICON)
                                    .min_size(egui::vec2(theme::SEND_BUTTON_WIDTH, theme::BUTTON_HEIGHT)),
                            ));
                        });
                    });
            },
        );
        InputOutput { field, send }
    }
}

/// Two labeled lines: the expression and what it evaluated to
pub struct ResultView {
    expression: String,
    result: String,
}

impl Default for ResultView {
    fn default() -> Self {
        Self::new(SAMPLE_EXPRESSION, SAMPLE_RESULT)
    }
}

impl ResultView {
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
        }
    }

    pub fn lines(&self) -> [String; 2] {
        [
            format!("{}{}", EXPRESSION_PROMPT, self.expression),
            format!("{}{}", RESULT_PROMPT, self.result),
        ]
    }

    pub fn describe(&self) -> Vec<Widget> {
        self.lines().into_iter().map(Widget::TextLine).collect()
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        theme::section_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            for line in self.lines() {
                ui.label(
                    egui::RichText::new(line)
                        .monospace()
                        .size(theme::FONT_BODY)
                        .color(theme::TEXT_SECONDARY),
                );
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_view_is_one_field_and_one_send_button() {
        let view = InputView::default();
        assert_eq!(
            view.describe(),
            vec![Widget::TextInput, Widget::IconButton(SEND_ICON)]
        );
    }

    #[test]
    fn typing_does_not_change_input_view() {
        let mut view = InputView::default();
        let before = view.describe();
        view.draft.push_str("(define x 10)");
        assert_eq!(view.describe(), before);
    }

    #[test]
    fn sample_result_lines() {
        let view = ResultView::default();
        assert_eq!(
            view.lines(),
            ["uinput ]=> (+ 1 2)".to_string(), "answer]=> 3".to_string()]
        );
    }

    #[test]
    fn result_view_renders_values_verbatim() {
        let cases = [
            ("", ""),
            ("(car '(a b))", "a"),
            ("  padded  ", "\"str\""),
            ("λx.x", "#<procedure>"),
        ];
        for (expr, result) in cases {
            let view = ResultView::new(expr, result);
            assert_eq!(
                view.describe(),
                vec![
                    Widget::TextLine(format!("uinput ]=> {}", expr)),
                    Widget::TextLine(format!("answer]=> {}", result)),
                ]
            );
        }
    }
}
