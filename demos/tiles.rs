//! Tile a handful of panels across the terminal.
//!
//! Resize the window to watch the layout change. `q` or `Esc` quits.
//!
//! ```sh
//! cargo run --example tiles
//! ```

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::Print,
    terminal::{
        self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};

use tessellate::content::{ASPECT_ATTR, WEIGHT_ATTR};
use tessellate::dom::{Dom, NodeData};
use tessellate::layout::LayoutEngine;
use tessellate::{Region, Size, Tiler, TilerConfig};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Terminal cells are roughly twice as tall as they are wide.
const ROW_SCALE: f64 = 2.0;

const PANELS: &[(&str, Option<&str>, Option<&str>)] = &[
    ("video", Some("16:9"), Some("3")),
    ("chat", Some("1:3"), None),
    ("slides", Some("4:3"), Some("2")),
    ("notes", None, None),
    ("avatar", Some("1:1"), None),
];

fn page() -> Dom {
    let mut dom = Dom::new();
    let body = dom.insert(NodeData::new("Body"));
    dom.insert_child(body, NodeData::new("App").with_id("app"));
    let contents = dom.insert_child(body, NodeData::new("List").with_id("contents"));
    for (name, aspect, weight) in PANELS {
        let mut panel = NodeData::new("Panel").with_id(*name);
        if let Some(aspect) = aspect {
            panel = panel.with_attr(ASPECT_ATTR, *aspect);
        }
        if let Some(weight) = weight {
            panel = panel.with_attr(WEIGHT_ATTR, *weight);
        }
        dom.insert_child(contents, panel);
    }
    dom
}

fn viewport(cols: u16, rows: u16) -> Size {
    Size::new(f64::from(cols), f64::from(rows) * ROW_SCALE)
}

fn draw_box(out: &mut impl Write, region: Region, label: &str) -> io::Result<()> {
    let top = region.y / ROW_SCALE as i32;
    let bottom = region.bottom() / ROW_SCALE as i32 - 1;
    let (left, right) = (region.x, region.right() - 1);
    if right <= left || bottom <= top || left < 0 || top < 0 {
        return Ok(());
    }
    let inner = (right - left - 1) as usize;

    queue!(out, MoveTo(left as u16, top as u16), Print(format!("┌{}┐", "─".repeat(inner))))?;
    for y in top + 1..bottom {
        queue!(out, MoveTo(left as u16, y as u16), Print("│"))?;
        queue!(out, MoveTo(right as u16, y as u16), Print("│"))?;
    }
    queue!(out, MoveTo(left as u16, bottom as u16), Print(format!("└{}┘", "─".repeat(inner))))?;

    let text: String = label.chars().take(inner).collect();
    if bottom > top + 1 {
        queue!(out, MoveTo(left as u16 + 1, top as u16 + 1), Print(text))?;
    }
    Ok(())
}

fn render(out: &mut impl Write, dom: &Dom, tiler: &Tiler, engine: &LayoutEngine, cost: f64) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;
    for item in tiler.items() {
        let Some(region) = engine.region(dom, item.node) else {
            continue;
        };
        let name = dom.get(item.node).and_then(|d| d.id.clone()).unwrap_or_default();
        let hint = item.target_aspect.map(|a| format!(" {a}")).unwrap_or_default();
        draw_box(out, region, &format!("{name}{hint}"))?;
    }
    queue!(out, MoveTo(0, 0), Print(format!("cost {cost:.4}  q to quit")))?;
    out.flush()
}

fn run(out: &mut impl Write) -> Result<()> {
    let mut dom = page();
    let tiler = Tiler::from_dom(&dom, TilerConfig::new().with_gap(2.0))?;
    let app = tiler.container();

    let (cols, rows) = terminal::size()?;
    let mut size = viewport(cols, rows);
    let mut cost = tiler.first_paint(&mut dom, size);
    let mut engine = LayoutEngine::new();

    loop {
        engine.sync(&dom, app, size);
        engine.compute(size);
        render(out, &dom, &tiler, &engine, cost)?;

        if event::poll(tiler.config().refresh)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                        return Ok(());
                    }
                }
                Event::Resize(cols, rows) => {
                    size = viewport(cols, rows);
                    cost = tiler.recompute(&mut dom, size);
                }
                _ => {}
            }
        } else if let Some(c) = tiler.recompute_measured(&mut dom, &engine) {
            cost = c;
        }
    }
}

fn main() -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let result = run(&mut stdout);

    execute!(stdout, LeaveAlternateScreen, Show)?;
    disable_raw_mode()?;
    result
}
