use clap::{Parser, ValueEnum};
use eframe::egui::{self, Color32, RichText};
use egui_swap::{utils::swap_items, ColumnSwapper, GridSwapper, RowSwapper, SwapResponse};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Layout {
    Row,
    Column,
    Grid,
}

/// Drag to swap demo
#[derive(Debug, Parser)]
struct Args {
    /// Arrangement shown on startup
    #[arg(long, value_enum, default_value_t = Layout::Grid)]
    layout: Layout,
    /// Number of tiles
    #[arg(long, default_value_t = 9)]
    items: usize,
    /// Tiles per row in the grid
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u16).range(1..))]
    columns: u16,
    /// Side length of a tile in points
    #[arg(long, default_value_t = 80.0)]
    box_size: f32,
}

#[derive(Debug, Clone)]
struct Tile {
    name: String,
    color: Color32,
}

fn tiles(count: usize) -> Vec<Tile> {
    const PALETTE: [Color32; 9] = [
        Color32::from_rgb(0xe5, 0x73, 0x73),
        Color32::from_rgb(0xf0, 0x62, 0x92),
        Color32::from_rgb(0xba, 0x68, 0xc8),
        Color32::from_rgb(0x79, 0x86, 0xcb),
        Color32::from_rgb(0x4f, 0xc3, 0xf7),
        Color32::from_rgb(0x4d, 0xb6, 0xac),
        Color32::from_rgb(0xae, 0xd5, 0x81),
        Color32::from_rgb(0xff, 0xd5, 0x4f),
        Color32::from_rgb(0xff, 0x8a, 0x65),
    ];

    (0..count)
        .map(|idx| Tile {
            name: format!("j{}", idx + 1),
            color: PALETTE[idx % PALETTE.len()],
        })
        .collect()
}

struct SwapDemo {
    layout: Layout,
    item_count: usize,
    tiles: Vec<Tile>,
    row: RowSwapper,
    column: ColumnSwapper,
    grid: GridSwapper,
}

impl SwapDemo {
    fn new(args: &Args) -> Self {
        Self {
            layout: args.layout,
            item_count: args.items,
            tiles: tiles(args.items),
            row: RowSwapper::new("row", args.box_size),
            column: ColumnSwapper::new("column", args.box_size),
            grid: GridSwapper::new("grid", usize::from(args.columns), args.box_size),
        }
    }

    fn swapper_ui(&mut self, ui: &mut egui::Ui) -> SwapResponse {
        let tiles = &self.tiles;
        let tile_ui = |ui: &mut egui::Ui, index: usize| {
            let tile = &tiles[index];
            let rect = ui.max_rect();
            // the swapper draws the resting place of a dragged tile disabled
            let color = if ui.is_enabled() {
                tile.color
            } else {
                tile.color.gamma_multiply(0.35)
            };
            ui.painter().rect_filled(rect, 10.0, color);
            ui.label(RichText::new(&tile.name).color(Color32::BLACK).strong());
        };

        match self.layout {
            Layout::Row => self.row.ui(ui, tiles.len(), tile_ui),
            Layout::Column => self.column.ui(ui, tiles.len(), tile_ui),
            Layout::Grid => self.grid.ui(ui, tiles.len(), tile_ui),
        }
    }
}

impl eframe::App for SwapDemo {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Drag to Swap");
                ui.horizontal(|ui| {
                    ui.selectable_value(&mut self.layout, Layout::Row, "Row");
                    ui.selectable_value(&mut self.layout, Layout::Column, "Column");
                    ui.selectable_value(&mut self.layout, Layout::Grid, "Grid");
                    ui.separator();
                    ui.add(egui::Slider::new(&mut self.item_count, 1..=24).text("tiles"));
                    if ui.button("Reset").clicked() {
                        tracing::info!(count = self.item_count, "tiles reset");
                        self.tiles = tiles(self.item_count);
                    }
                });
            });
            ui.add_space(20.0);

            // tiles added with the slider show up at the end, removed ones drop off the end
            if self.item_count != self.tiles.len() {
                let mut all = tiles(self.item_count);
                let kept = self.tiles.len().min(self.item_count);
                all.splice(..kept, self.tiles.drain(..kept));
                self.tiles = all;
            }

            let response = self.swapper_ui(ui);
            if let Some(swap) = response.completed() {
                tracing::info!(
                    from = %self.tiles[swap.from].name,
                    to = %self.tiles[swap.to].name,
                    "swapped tiles"
                );
                swap_items(swap.from, swap.to, &mut self.tiles);
            }
        });
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    tracing::info!(?args, "starting demo");

    let options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(480.0, 720.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Drag to Swap",
        options,
        Box::new(move |_cc| Box::new(SwapDemo::new(&args))),
    )
}
