//! World map with a fixed centre reticle; the map moves behind it.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Map, MapResolution},
        Block, Borders,
    },
    Frame,
};

use crate::core::app::{App, Focus};

pub const FOCUS_ZOOM: f64 = 1.5;
pub const WAITING_READOUT: &str = "WAITING_FOR_INPUT...";

const GRID_STEP: f64 = 30.0;
const RETICLE_ARM: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

impl Viewport {
    pub fn world() -> Self {
        Self {
            x_bounds: [-180.0, 180.0],
            y_bounds: [-90.0, 90.0],
        }
    }

    /// Zoomed view centred on `(lat, lng)`.
    pub fn focused(lat: f64, lng: f64) -> Self {
        let half_w = 180.0 / FOCUS_ZOOM;
        let half_h = 90.0 / FOCUS_ZOOM;
        Self {
            x_bounds: [lng - half_w, lng + half_w],
            y_bounds: [lat - half_h, lat + half_h],
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.y_bounds[0] + self.y_bounds[1]) / 2.0,
            (self.x_bounds[0] + self.x_bounds[1]) / 2.0,
        )
    }
}

/// The free reticle wins while the map has focus, then the selected place.
pub fn map_target(app: &App) -> Option<(f64, f64)> {
    app.ui.reticle.or_else(|| {
        app.explorer
            .selected_location
            .as_ref()
            .map(|loc| (loc.lat, loc.lng))
    })
}

pub fn viewport_for(target: Option<(f64, f64)>) -> Viewport {
    match target {
        Some((lat, lng)) => Viewport::focused(lat, lng),
        None => Viewport::world(),
    }
}

pub fn scan_readout(app: &App) -> String {
    match &app.explorer.selected_location {
        Some(location) => format!("SCAN_COORD: {}", location.coordinate_label()),
        None => format!("SCAN_COORD: {WAITING_READOUT}"),
    }
}

fn aim_readout(app: &App) -> Option<String> {
    if app.is_naming_point() {
        return Some("IDENTIFYING POINT...".to_string());
    }
    let (lat, lng) = app.ui.reticle?;
    Some(format!("AIM {lat:.1}N {lng:.1}E · Enter to pin"))
}

pub fn render_map(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.ui.theme;
    let border_style = if app.ui.focus == Focus::Map {
        theme.focus_border_style
    } else {
        theme.border_style
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(
            Line::from(Span::styled(" SATELLITE LOCK ", theme.muted_style))
                .alignment(Alignment::Right),
        )
        .title_bottom(Span::styled(format!(" {} ", scan_readout(app)), theme.muted_style));
    if let Some(aim) = aim_readout(app) {
        block = block.title(Span::styled(format!(" {aim} "), theme.accent_style));
    }

    let viewport = viewport_for(map_target(app));
    let (center_lat, center_lng) = viewport.center();
    let outline = theme.map_outline_color;
    let grid = theme.map_grid_color;
    let reticle = theme.reticle_style;

    let canvas = Canvas::default()
        .block(block)
        .background_color(theme.background_color)
        .x_bounds(viewport.x_bounds)
        .y_bounds(viewport.y_bounds)
        .paint(move |ctx| {
            let mut lng = -180.0;
            while lng <= 180.0 {
                ctx.draw(&CanvasLine::new(lng, -90.0, lng, 90.0, grid));
                lng += GRID_STEP;
            }
            let mut lat = -90.0;
            while lat <= 90.0 {
                ctx.draw(&CanvasLine::new(-180.0, lat, 180.0, lat, grid));
                lat += GRID_STEP;
            }
            ctx.layer();

            ctx.draw(&Map {
                color: outline,
                resolution: MapResolution::High,
            });
            ctx.layer();

            let color = reticle.fg.unwrap_or(outline);
            ctx.draw(&CanvasLine::new(
                center_lng - RETICLE_ARM,
                center_lat,
                center_lng + RETICLE_ARM,
                center_lat,
                color,
            ));
            ctx.draw(&CanvasLine::new(
                center_lng,
                center_lat - RETICLE_ARM,
                center_lng,
                center_lat + RETICLE_ARM,
                color,
            ));
            ctx.print(center_lng, center_lat, Span::styled("◎", reticle));
        });

    f.render_widget(canvas, area);
}
