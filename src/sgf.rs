//! Minimal SGF support for setup positions.
//!
//! Tsumego problems arrive as a single setup node, `(;FF[4]SZ[9]AB[ab]...
//! AW[cc]...)`, so only the first node of the tree is read and only the
//! properties the board needs: `SZ` plus the `AB`/`AW` stone lists. Move
//! sequences, variations and the rest of the FF[4] property set are ignored.

use anyhow::{Result, bail, ensure};

/// Setup data extracted from the first SGF node.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Setup {
    pub size: usize,
    pub black: Vec<(usize, usize)>,
    pub white: Vec<(usize, usize)>,
}

/// Parses the first node of an SGF game tree.
pub fn parse(text: &str) -> Result<Setup> {
    let src: Vec<char> = text.chars().collect();
    let skip_ws = |i: &mut usize| {
        while *i < src.len() && src[*i].is_whitespace() {
            *i += 1;
        }
    };

    let mut i = 0;
    skip_ws(&mut i);
    ensure!(src.get(i) == Some(&'('), "SGF must start with '('");
    i += 1;
    skip_ws(&mut i);
    ensure!(src.get(i) == Some(&';'), "SGF root node is missing ';'");
    i += 1;

    let mut setup = Setup::default();
    loop {
        skip_ws(&mut i);
        match src.get(i).copied() {
            // end of the first node: done, the rest of the tree is ignored
            None | Some(')') | Some(';') => break,
            Some(c) if c.is_ascii_uppercase() => {
                let start = i;
                while i < src.len() && src[i].is_ascii_uppercase() {
                    i += 1;
                }
                let name: String = src[start..i].iter().collect();

                let mut values: Vec<String> = Vec::new();
                loop {
                    skip_ws(&mut i);
                    if src.get(i) != Some(&'[') {
                        break;
                    }
                    i += 1;
                    let vstart = i;
                    while i < src.len() && src[i] != ']' {
                        i += 1;
                    }
                    ensure!(i < src.len(), "unterminated value in SGF property {name}");
                    values.push(src[vstart..i].iter().collect());
                    i += 1;
                }
                ensure!(!values.is_empty(), "SGF property {name} has no value");

                match name.as_str() {
                    "SZ" => {
                        setup.size = match values[0].trim().parse() {
                            Ok(n) => n,
                            Err(_) => bail!("bad SZ value {:?}", values[0]),
                        }
                    }
                    "AB" => {
                        for v in &values {
                            setup.black.push(point(v)?);
                        }
                    }
                    "AW" => {
                        for v in &values {
                            setup.white.push(point(v)?);
                        }
                    }
                    _ => {}
                }
            }
            Some(c) => bail!("unexpected character {c:?} in SGF"),
        }
    }

    ensure!(setup.size > 0, "SGF setup is missing a valid SZ property");
    Ok(setup)
}

/// One SGF point, two lowercase letters: `"ab"` is x = 0, y = 1.
fn point(v: &str) -> Result<(usize, usize)> {
    let chars: Vec<char> = v.trim().chars().collect();
    ensure!(
        chars.len() == 2 && chars.iter().all(|c| c.is_ascii_lowercase()),
        "bad SGF point {v:?}"
    );
    Ok((chars[0] as usize - 'a' as usize, chars[1] as usize - 'a' as usize))
}

/// Renders a point back into SGF letters.
pub fn coord(x: usize, y: usize) -> String {
    let letter = |n: usize| (b'a' + n as u8) as char;
    format!("{}{}", letter(x), letter(y))
}
