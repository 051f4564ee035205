//! Conversions between RGB, HSB and HSL.
//!
//! All functions take and return normalized `[c1, c2, c3, alpha]` arrays with
//! every component in `[0, 1]`; hue is a fraction of a full turn. Alpha passes
//! through unchanged.

/// Splits the hue circle into six sectors of one unit each.
const SECTORS: f32 = 6.0;

pub fn hsba_to_rgba([h, s, v, a]: [f32; 4]) -> [f32; 4] {
    if s == 0.0 {
        return [v, v, v, a];
    }

    let hue = h * SECTORS;
    let sector = hue.floor();
    let tint1 = v * (1.0 - s);
    let tint2 = v * (1.0 - s * (hue - sector));
    let tint3 = v * (1.0 - s * (1.0 + sector - hue));

    // Sector 6 (hue == 1) wraps back onto sector 0.
    let (r, g, b) = match sector as i32 {
        1 => (tint2, v, tint1),
        2 => (tint1, v, tint3),
        3 => (tint1, tint2, v),
        4 => (tint3, tint1, v),
        5 => (v, tint1, tint2),
        _ => (v, tint3, tint1),
    };
    [r, g, b, a]
}

pub fn hsla_to_rgba([h, s, l, a]: [f32; 4]) -> [f32; 4] {
    if s == 0.0 {
        return [l, l, l, a];
    }

    let hue = h * SECTORS;
    let val = if l < 0.5 { (1.0 + s) * l } else { l + s - l * s };
    let zest = 2.0 * l - val;

    let channel = |mut hue: f32| {
        if hue < 0.0 {
            hue += SECTORS;
        } else if hue >= SECTORS {
            hue -= SECTORS;
        }
        if hue < 1.0 {
            zest + (val - zest) * hue
        } else if hue < 3.0 {
            val
        } else if hue < 4.0 {
            zest + (val - zest) * (4.0 - hue)
        } else {
            zest
        }
    };

    [channel(hue + 2.0), channel(hue), channel(hue - 2.0), a]
}

/// Hue sector position (in `[0, 6)`) of an RGB triple with the given max and chroma.
fn hue_of(r: f32, g: f32, b: f32, max: f32, chroma: f32) -> f32 {
    let mut hue = if r == max {
        (g - b) / chroma
    } else if g == max {
        2.0 + (b - r) / chroma
    } else {
        4.0 + (r - g) / chroma
    };
    if hue < 0.0 {
        hue += SECTORS;
    } else if hue >= SECTORS {
        hue -= SECTORS;
    }
    hue
}

pub fn rgba_to_hsba([r, g, b, a]: [f32; 4]) -> [f32; 4] {
    let max = r.max(g).max(b);
    let chroma = max - r.min(g).min(b);
    if chroma == 0.0 {
        return [0.0, 0.0, max, a];
    }
    [hue_of(r, g, b, max, chroma) / SECTORS, chroma / max, max, a]
}

pub fn rgba_to_hsla([r, g, b, a]: [f32; 4]) -> [f32; 4] {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    // Twice the lightness; halved on return.
    let li = max + min;
    let chroma = max - min;
    if chroma == 0.0 {
        return [0.0, 0.0, li / 2.0, a];
    }
    let s = if li < 1.0 { chroma / li } else { chroma / (2.0 - li) };
    [hue_of(r, g, b, max, chroma) / SECTORS, s, li / 2.0, a]
}
