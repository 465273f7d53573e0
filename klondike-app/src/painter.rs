use egui::{Color32, CornerRadius, Pos2, Rect, Stroke, StrokeKind, Vec2};
use klondike_common::card::{Card, CardColor};
use klondike_common::render::{DrawCall, Surface, Texture};

/// Paints draw calls with plain egui shapes: faces as rank/suit glyphs,
/// backs as a filled panel. No sprite sheet is loaded, so the `source`
/// rect of a card call is ignored.
pub struct EguiSurface {
    painter: egui::Painter,
}

impl EguiSurface {
    pub fn new(painter: egui::Painter) -> Self {
        Self { painter }
    }

    fn paint_card(&self, rect: Rect, card: &Card, texture: Texture) {
        let bg_color = match texture {
            Texture::Face => Color32::from_gray(248),
            Texture::Back => Color32::from_rgb(0, 128, 128),
        };
        self.painter
            .rect_filled(rect, CornerRadius::same(5), bg_color);
        self.painter.rect_stroke(
            rect,
            CornerRadius::same(5),
            Stroke::new(1.0, Color32::from_gray(100)),
            StrokeKind::Inside,
        );

        if texture == Texture::Back {
            return;
        }

        let text_color = match card.color() {
            CardColor::Red => Color32::RED,
            CardColor::Black => Color32::BLACK,
        };
        let (rank_symbol, suit_symbol) = card.symbols();
        let font_id = egui::FontId::proportional((rect.width() / 5.0).max(10.0));
        let padding = Vec2::new(3.0, 3.0);

        self.painter.text(
            rect.min + padding,
            egui::Align2::LEFT_TOP,
            rank_symbol,
            font_id.clone(),
            text_color,
        );
        self.painter.text(
            Pos2::new(rect.max.x - padding.x, rect.min.y + padding.y),
            egui::Align2::RIGHT_TOP,
            suit_symbol,
            font_id.clone(),
            text_color,
        );
        self.painter.text(
            Pos2::new(rect.min.x + padding.x, rect.max.y - padding.y),
            egui::Align2::LEFT_BOTTOM,
            suit_symbol,
            font_id.clone(),
            text_color,
        );
        self.painter.text(
            rect.max - padding,
            egui::Align2::RIGHT_BOTTOM,
            rank_symbol,
            font_id,
            text_color,
        );
    }

    fn paint_empty_slot(&self, rect: Rect) {
        self.painter.rect_stroke(
            rect,
            CornerRadius::same(5),
            Stroke::new(1.0, Color32::from_gray(100)),
            StrokeKind::Inside,
        );
    }
}

impl Surface for EguiSurface {
    fn draw(&mut self, call: &DrawCall) {
        match *call {
            DrawCall::Card {
                card,
                texture,
                dest,
                ..
            } => self.paint_card(dest, &card, texture),
            DrawCall::EmptySlot { dest } => self.paint_empty_slot(dest),
        }
    }
}
