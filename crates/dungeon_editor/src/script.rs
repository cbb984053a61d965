//! Edit scripts
//!
//! A script replays what a user does in the editor, one command per line.
//! Blank lines and lines starting with `#` are ignored.
//!
//! ```text
//! tool line_draw
//! colors #fff #000
//! click 2_3
//! down 0_0
//! move 0_5
//! up
//! down 4_4 ctrl shift
//! z max
//! tool tile_edit
//! click 1_1
//! edit character=D name=Door state=open:false
//! save
//! ```

use std::{path::Path, str::FromStr};

use anyhow::{anyhow, bail, Context};
use dungeon_editor_engine::{
    remote::{EdgeTileSource, TileValidator},
    state_vars, ColorPair, Coord, Edge, EditSession, Key, Modifiers, PointerButton, TileEditForm, Tool, ViewMode,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZTarget {
    Index(i32),
    Lower,
    Upper,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Tool(Tool),
    Template(i64),
    Shortlisted(i64),
    Foreground(String),
    Background(String),
    Colors(ColorPair),
    ResetColors,
    Down(Coord, Modifiers),
    Move(Coord, Modifiers),
    Up,
    Leave,
    Click(Coord, Modifiers),
    Pick(Coord),
    Type(String),
    Backspace(usize),
    Z(ZTarget),
    View(Option<ViewMode>),
    Edit(Vec<(String, String)>),
    Save,
    Cancel,
    Edge(Edge, Option<i32>),
    Highlight,
    Unhighlight,
}

/// Collaborators a script may need.
pub struct Collaborators<'a> {
    pub validator: &'a dyn TileValidator,
    pub edges: &'a dyn EdgeTileSource,
}

fn coord(arg: Option<&str>) -> anyhow::Result<Coord> {
    let arg = arg.ok_or_else(|| anyhow!("missing coordinate"))?;
    Ok(arg.parse::<Coord>()?)
}

fn modifiers(args: &[&str]) -> anyhow::Result<Modifiers> {
    let mut modifiers = Modifiers::NONE;
    for arg in args {
        match *arg {
            "shift" => modifiers.shift = true,
            "ctrl" => modifiers.ctrl = true,
            other => bail!("unknown modifier '{other}'"),
        }
    }
    Ok(modifiers)
}

fn single<'a>(args: &[&'a str], what: &str) -> anyhow::Result<&'a str> {
    match args {
        [arg] => Ok(*arg),
        _ => bail!("expected {what}"),
    }
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (name, rest) = line.trim().split_once(char::is_whitespace).unwrap_or((line.trim(), ""));
        let args: Vec<&str> = rest.split_whitespace().collect();

        let command = match name {
            "tool" => Command::Tool(single(&args, "a tool")?.parse()?),
            "template" => Command::Template(single(&args, "a template id")?.parse()?),
            "shortlisted" => Command::Shortlisted(single(&args, "a shortlist id")?.parse()?),
            "fg" => Command::Foreground(single(&args, "a color")?.to_string()),
            "bg" => Command::Background(single(&args, "a color")?.to_string()),
            "colors" => match args.as_slice() {
                [color, background_color] => Command::Colors(ColorPair::new(*color, *background_color)),
                _ => bail!("expected a foreground and a background color"),
            },
            "reset_colors" => Command::ResetColors,
            "down" => Command::Down(coord(args.first().copied())?, modifiers(args.get(1..).unwrap_or_default())?),
            "move" => Command::Move(coord(args.first().copied())?, modifiers(args.get(1..).unwrap_or_default())?),
            "click" => Command::Click(coord(args.first().copied())?, modifiers(args.get(1..).unwrap_or_default())?),
            "up" => Command::Up,
            "leave" => Command::Leave,
            "pick" => Command::Pick(coord(args.first().copied())?),
            // The rest of the line is typed verbatim, including spaces
            "type" => Command::Type(rest.to_string()),
            "backspace" => Command::Backspace(args.first().map_or(Ok(1), |n| n.parse())?),
            "z" => Command::Z(match single(&args, "a z-index, min or max")? {
                "min" => ZTarget::Lower,
                "max" => ZTarget::Upper,
                z => ZTarget::Index(z.parse()?),
            }),
            "view" => Command::View(match args.as_slice() {
                [] | ["toggle"] => None,
                ["up"] => Some(ViewMode::UpToCurrent),
                ["only"] => Some(ViewMode::OnlyCurrent),
                _ => bail!("expected up, only or toggle"),
            }),
            "edit" => Command::Edit(
                args.iter()
                    .map(|arg| {
                        arg.split_once('=')
                            .map(|(k, v)| (k.to_string(), v.to_string()))
                            .ok_or_else(|| anyhow!("expected field=value, got '{arg}'"))
                    })
                    .collect::<anyhow::Result<_>>()?,
            ),
            "save" => Command::Save,
            "cancel" => Command::Cancel,
            "edge" => match args.as_slice() {
                [edge, "none"] => Command::Edge(edge.parse()?, None),
                [edge, level] => Command::Edge(edge.parse()?, Some(level.parse()?)),
                _ => bail!("expected an edge and a level number or none"),
            },
            "highlight" => Command::Highlight,
            "unhighlight" => Command::Unhighlight,
            other => bail!("unknown command '{other}'"),
        };
        Ok(command)
    }
}

/// Parses a whole script, reporting the line of the first bad command.
pub fn parse_script(text: &str) -> anyhow::Result<Vec<Command>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
        .map(|(i, line)| line.parse::<Command>().with_context(|| format!("line {}: {}", i + 1, line.trim())))
        .collect()
}

pub fn load_script(path: &Path) -> anyhow::Result<Vec<Command>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading script {}", path.display()))?;
    parse_script(&text)
}

fn apply_edit(form: &mut TileEditForm, field: &str, value: &str) -> anyhow::Result<()> {
    match field {
        "name" => form.name = value.to_string(),
        "character" => form.character = value.to_string(),
        "color" => form.color = value.to_string(),
        "background_color" => form.background_color = value.to_string(),
        "script" => form.script = value.to_string(),
        "state" => form.state_variables = state_vars::parse(value),
        "animate_random" => form.animate_random = value.parse()?,
        "animate_period" => form.animate_period = if value.is_empty() { None } else { Some(value.parse()?) },
        "animate_characters" => form.animate_characters = value.to_string(),
        "animate_colors" => form.animate_colors = value.to_string(),
        "animate_background_colors" => form.animate_background_colors = value.to_string(),
        other => bail!("unknown tile field '{other}'"),
    }
    Ok(())
}

/// Runs one command against the session.
pub fn apply(session: &mut EditSession, command: &Command, ctx: &Collaborators<'_>) -> anyhow::Result<()> {
    log::trace!("{command:?}");
    match command {
        Command::Tool(tool) => session.select_tool(*tool),
        Command::Template(id) => session.select_template(*id)?,
        Command::Shortlisted(id) => session.select_shortlist_entry(*id)?,
        Command::Foreground(color) => session.set_foreground(color.as_str()),
        Command::Background(color) => session.set_background(color.as_str()),
        Command::Colors(colors) => session.set_colors(colors.clone()),
        Command::ResetColors => session.reset_colors(),
        Command::Down(coord, modifiers) => {
            session.pointer_down(*coord, PointerButton::Primary, *modifiers);
        }
        Command::Move(coord, modifiers) => {
            session.pointer_move(*coord, *modifiers);
        }
        Command::Up => session.pointer_up(),
        Command::Leave => session.pointer_leave(),
        Command::Click(coord, modifiers) => {
            session.pointer_down(*coord, PointerButton::Primary, *modifiers);
            session.pointer_up();
        }
        Command::Pick(coord) => {
            session.pointer_down(*coord, PointerButton::Secondary, Modifiers::NONE);
        }
        Command::Type(text) => {
            for ch in text.chars() {
                session.key_down(Key::Character(ch));
            }
        }
        Command::Backspace(count) => {
            for _ in 0..*count {
                session.key_down(Key::Backspace);
            }
        }
        Command::Z(target) => match target {
            ZTarget::Index(z) => session.set_viewport_z(*z),
            ZTarget::Lower => session.viewport_to_lower_bound(),
            ZTarget::Upper => session.viewport_to_upper_bound(),
        },
        Command::View(mode) => match mode {
            Some(mode) => session.set_view_mode(*mode),
            None => session.toggle_view_mode(),
        },
        Command::Edit(fields) => {
            let form = session.pending_tile_edit_mut().ok_or_else(|| anyhow!("no tile edit is open"))?;
            for (field, value) in fields {
                apply_edit(form, field, value)?;
            }
        }
        Command::Save => {
            session.save_tile_edit(ctx.validator)?;
        }
        Command::Cancel => session.cancel_tile_edit(),
        Command::Edge(edge, level_number) => session.update_edge_tiles(*edge, *level_number, ctx.edges)?,
        Command::Highlight => {
            session.key_down(Key::Shift);
        }
        Command::Unhighlight => session.key_up(Key::Shift),
    }
    Ok(())
}

/// Replays `commands` in order and stops at the first failing one.
pub fn run(session: &mut EditSession, commands: &[Command], ctx: &Collaborators<'_>) -> anyhow::Result<()> {
    for (i, command) in commands.iter().enumerate() {
        apply(session, command, ctx).with_context(|| format!("command {} ({command:?}) failed", i + 1))?;
    }
    log::debug!("replayed {} commands", commands.len());
    Ok(())
}
