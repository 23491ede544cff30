//! ASCII art banner for the `run` command.

/// ANSI true-color escape sequences for the banner palette.
struct Colors {
    block: &'static str,
    letter: &'static str,
    title: &'static str,
    subtitle: &'static str,
    reset: &'static str,
}

const COLOR: Colors = Colors {
    block: "\x1b[38;2;88;110;140m",
    letter: "\x1b[1;38;2;236;196;120m",
    title: "\x1b[1;38;2;200;210;230m",
    subtitle: "\x1b[38;2;100;100;120m",
    reset: "\x1b[0m",
};

const PLAIN: Colors = Colors {
    block: "",
    letter: "",
    title: "",
    subtitle: "",
    reset: "",
};

/// Palette for the resolved `--color` choice; terminal detection already
/// happened in `main`.
fn palette(color: bool) -> &'static Colors {
    if color {
        &COLOR
    } else {
        &PLAIN
    }
}

/// Prints the banner to stdout, in true-color when `color` is set.
pub fn print_banner(color: bool) {
    let c = palette(color);

    let b = c.block;
    let l = c.letter;
    let tt = c.title;
    let st = c.subtitle;
    let r = c.reset;

    println!(
        r#"
{b} ┌───┐┌───┐┌───┐┌───┐┌───┐{r}
{b} │ {l}S{b} ││ {l}O{b} ││ {l}L{b} ││ {l}I{b} ││ {l}D{b} │{r}   {tt}solid-lessons{r}
{b} └───┘└───┘└───┘└───┘└───┘{r}   {st}five principles, shown badly and then well{r}
"#
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_follows_color_choice_only() {
        assert!(palette(true).reset.starts_with("\x1b["));
        assert!(palette(false).reset.is_empty());
        assert!(palette(false).letter.is_empty());
    }
}
