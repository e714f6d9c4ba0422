use yew::prelude::*;

const ICONS: [&str; 17] = [
    "/images/icons/image.png",
    "/images/icons/image copy.png",
    "/images/icons/image copy 2.png",
    "/images/icons/image copy 3.png",
    "/images/icons/image copy 4.png",
    "/images/icons/image copy 5.png",
    "/images/icons/image copy 6.png",
    "/images/icons/image copy 7.png",
    "/images/icons/image copy 8.png",
    "/images/icons/image copy 9.png",
    "/images/icons/image copy 10.png",
    "/images/icons/image copy 11.png",
    "/images/icons/image copy 12.png",
    "/images/icons/image copy 14.png",
    "/images/icons/image copy 15.png",
    "/images/icons/image copy 16.png",
    "/images/icons/image copy 17.png",
];

pub const GRID_SIDE: usize = 10;

#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    pub src: &'static str,
    /// Percent of the viewport.
    pub top: f64,
    pub left: f64,
    pub size: u32,
    pub rotate: i32,
    pub opacity: f64,
}

impl Placement {
    pub fn style(&self) -> String {
        format!(
            "position: absolute; top: {}%; left: {}%; transform: rotate({}deg);",
            self.top, self.left, self.rotate
        )
    }
}

struct Layer {
    tops: &'static [f64],
    lefts: &'static [f64],
    sizes: &'static [u32],
    angles: &'static [i32],
    opacity: f64,
}

// Hand-placed layers, largest first.
const LAYERS: [Layer; 3] = [
    Layer {
        tops: &[8.0, 18.0, 30.0, 45.0, 60.0, 72.0, 15.0, 38.0, 82.0],
        lefts: &[6.0, 85.0, 14.0, 78.0, 10.0, 50.0, 32.0, 58.0, 70.0],
        sizes: &[64, 56, 60, 50, 72, 60, 54, 58, 66],
        angles: &[-8, 10, -6, 8, -12, 5, 9, -7, 6],
        opacity: 0.5,
    },
    Layer {
        tops: &[12.0, 22.0, 34.0, 48.0, 62.0, 76.0, 18.0, 28.0, 42.0, 56.0, 70.0, 84.0],
        lefts: &[22.0, 36.0, 68.0, 12.0, 44.0, 80.0, 28.0, 62.0, 16.0, 52.0, 74.0, 38.0],
        sizes: &[48, 44, 46, 42, 50, 40, 46, 44, 42, 48, 46, 40],
        angles: &[-6, 5, -4, 7, -3, 4, -5, 6, -7, 3, -2, 5],
        opacity: 0.45,
    },
    Layer {
        tops: &[
            6.0, 14.0, 20.0, 26.0, 32.0, 38.0, 44.0, 50.0, 56.0, 62.0, 68.0, 74.0, 80.0, 12.0,
            24.0, 36.0, 48.0, 60.0, 72.0, 84.0,
        ],
        lefts: &[
            10.0, 22.0, 34.0, 46.0, 58.0, 70.0, 82.0, 18.0, 30.0, 42.0, 54.0, 66.0, 78.0, 26.0,
            38.0, 50.0, 62.0, 74.0, 12.0, 86.0,
        ],
        sizes: &[32, 30, 28, 34, 30, 28, 32, 30, 28, 34, 30, 28, 32, 30, 28, 34, 30, 28, 32, 28],
        angles: &[-4, 3, -2, 5, -3, 4, -5, 2, -1, 4, -2, 3, -4, 5, -3, 2, -1, 4, -2, 3],
        opacity: 0.35,
    },
];

const GRID_ANGLES: [i32; 6] = [-4, 3, -2, 5, -3, 4];

/// Every watermark icon, back to front: the hand-placed layers, then a
/// 10x10 grid of tiny icons centered in each cell.
pub fn placements() -> Vec<Placement> {
    let mut out = Vec::new();

    for layer in LAYERS.iter() {
        for i in 0..layer.tops.len() {
            out.push(Placement {
                src: ICONS[i % ICONS.len()],
                top: layer.tops[i],
                left: layer.lefts[i],
                size: layer.sizes[i],
                rotate: layer.angles[i],
                opacity: layer.opacity,
            });
        }
    }

    for i in 0..GRID_SIDE * GRID_SIDE {
        let row = i / GRID_SIDE;
        let col = i % GRID_SIDE;
        out.push(Placement {
            src: ICONS[(i * 3) % ICONS.len()],
            top: (row * 10 + 5) as f64,
            left: (col * 10 + 5) as f64,
            size: 22 + (i % 3) as u32 * 4,
            rotate: GRID_ANGLES[i % GRID_ANGLES.len()],
            opacity: 0.3,
        });
    }

    out
}

/// Site-wide background: blurred photo, soft tint and faint travel icons.
#[function_component(Watermarks)]
pub fn watermarks() -> Html {
    let icons = use_memo(|_| placements(), ());

    html! {
        <>
            <div
                class="site-backdrop"
                aria-hidden="true"
                style="pointer-events: none; position: fixed; inset: 0; z-index: 0; background-image: url('/images/backdrop.png'); background-size: cover; background-position: center; filter: blur(4px) brightness(1.02); transform: scale(1.02);"
            ></div>
            <div
                class="site-tint"
                aria-hidden="true"
                style="pointer-events: none; position: fixed; inset: 0; z-index: 10; opacity: 0.12; background: linear-gradient(135deg, #0ea5e9 0%, #f43f5e 100%);"
            ></div>
            <div class="watermarks" aria-hidden="true" style="pointer-events: none; position: fixed; inset: 0; z-index: 20; user-select: none;">
                { for icons.iter().enumerate().map(|(i, icon)| html! {
                    <div key={i} style={format!("{} opacity: 0.1;", icon.style())}>
                        <img
                            src={icon.src}
                            width={icon.size.to_string()}
                            height={icon.size.to_string()}
                            alt="decorative travel icon"
                            style={format!("filter: grayscale(100%); opacity: {};", icon.opacity)}
                        />
                    </div>
                }) }
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_tables_line_up() {
        for layer in LAYERS.iter() {
            assert_eq!(layer.tops.len(), layer.lefts.len());
            assert_eq!(layer.tops.len(), layer.sizes.len());
            assert_eq!(layer.tops.len(), layer.angles.len());
        }
        assert_eq!(placements().len(), 9 + 12 + 20 + 100);
    }

    #[test]
    fn grid_covers_the_page() {
        let all = placements();
        let grid = &all[41..];
        assert_eq!(grid.len(), 100);
        assert_eq!((grid[0].top, grid[0].left), (5.0, 5.0));
        assert_eq!((grid[99].top, grid[99].left), (95.0, 95.0));
        assert_eq!((grid[12].top, grid[12].left), (15.0, 25.0));
        assert!(grid.iter().all(|p| [22, 26, 30].contains(&p.size)));
    }

    #[test]
    fn style_positions_in_percent() {
        let p = &placements()[0];
        assert_eq!(p.style(), "position: absolute; top: 8%; left: 6%; transform: rotate(-8deg);");
    }
}
