//! 主题模块
//! 提供 Catppuccin Mocha 与 Material 两套配色，以及指示器使用的调色板

use ratatui::style::Color;

/// Catppuccin Mocha 配色
/// 参考: https://github.com/catppuccin/catppuccin
pub struct CatppuccinMocha;

impl CatppuccinMocha {
    pub const BASE: Color = Color::Rgb(30, 30, 46); // #1e1e2e
    pub const MANTLE: Color = Color::Rgb(24, 24, 37); // #181825
    pub const SURFACE1: Color = Color::Rgb(69, 71, 90); // #45475a
    pub const OVERLAY0: Color = Color::Rgb(108, 112, 134); // #6c7086
    pub const TEXT: Color = Color::Rgb(205, 214, 244); // #cdd6f4
    pub const SUBTEXT1: Color = Color::Rgb(186, 194, 222); // #bac2de
    pub const PINK: Color = Color::Rgb(245, 194, 231); // #f5c2e7
    pub const MAUVE: Color = Color::Rgb(203, 166, 247); // #cba6f7
    pub const GREEN: Color = Color::Rgb(166, 227, 161); // #a6e3a1
    pub const YELLOW: Color = Color::Rgb(249, 226, 175); // #f9e2af
    pub const BLUE: Color = Color::Rgb(137, 180, 250); // #89b4fa
    pub const LAVENDER: Color = Color::Rgb(180, 190, 254); // #b4befe
}

/// Material Design 色板（原组件默认值来源）
pub struct Material;

impl Material {
    pub const INDIGO_500: Color = Color::Rgb(63, 81, 181); // #3f51b5
    pub const PINK_A200: Color = Color::Rgb(255, 64, 129); // #ff4081
    pub const GREY_50: Color = Color::Rgb(250, 250, 250); // #fafafa
    pub const GREY_300: Color = Color::Rgb(224, 224, 224); // #e0e0e0
    pub const GREY_500: Color = Color::Rgb(158, 158, 158); // #9e9e9e
    pub const GREY_700: Color = Color::Rgb(97, 97, 97); // #616161
    pub const GREY_900: Color = Color::Rgb(33, 33, 33); // #212121
    pub const GREEN_500: Color = Color::Rgb(76, 175, 80); // #4caf50
    pub const AMBER_500: Color = Color::Rgb(255, 193, 7); // #ffc107
}

/// 指示器默认颜色（显式注入到几何计算中）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// 加载中 / 完成时的描边颜色
    pub primary: Color,
    /// 未完成时的描边颜色
    pub grey: Color,
    /// 加载动画委托使用的强调色
    pub accent: Color,
}

/// 可选主题名称
pub const THEME_NAMES: [&str; 2] = ["catppuccin-mocha", "material"];

/// 应用主题
/// 定义各 UI 元素使用的颜色
#[derive(Debug, Clone)]
pub struct Theme {
    /// 主题名称
    pub name: &'static str,
    /// 背景色
    pub bg: Color,
    /// 前景色（文字）
    pub fg: Color,
    /// 边框颜色
    pub border: Color,
    /// 状态栏背景
    pub status_bg: Color,
    /// 状态栏文字
    pub status_fg: Color,
    /// 标题颜色
    pub title: Color,
    /// 成功色
    pub success: Color,
    /// 警告色
    pub warning: Color,
    /// 信息色
    pub info: Color,
    palette: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::catppuccin_mocha()
    }
}

impl Theme {
    /// 创建 Catppuccin Mocha 主题
    pub fn catppuccin_mocha() -> Self {
        Self {
            name: THEME_NAMES[0],
            bg: CatppuccinMocha::BASE,
            fg: CatppuccinMocha::TEXT,
            border: CatppuccinMocha::SURFACE1,
            status_bg: CatppuccinMocha::MANTLE,
            status_fg: CatppuccinMocha::SUBTEXT1,
            title: CatppuccinMocha::MAUVE,
            success: CatppuccinMocha::GREEN,
            warning: CatppuccinMocha::YELLOW,
            info: CatppuccinMocha::BLUE,
            palette: Palette {
                primary: CatppuccinMocha::LAVENDER,
                grey: CatppuccinMocha::OVERLAY0,
                accent: CatppuccinMocha::PINK,
            },
        }
    }

    /// 创建 Material 主题
    pub fn material() -> Self {
        Self {
            name: THEME_NAMES[1],
            bg: Material::GREY_900,
            fg: Material::GREY_50,
            border: Material::GREY_700,
            status_bg: Material::GREY_900,
            status_fg: Material::GREY_500,
            title: Material::INDIGO_500,
            success: Material::GREEN_500,
            warning: Material::AMBER_500,
            info: Material::INDIGO_500,
            palette: Palette {
                primary: Material::INDIGO_500,
                grey: Material::GREY_300,
                accent: Material::PINK_A200,
            },
        }
    }

    /// 按名称查找主题，未知名称回退到默认主题
    pub fn by_name(name: &str) -> Self {
        match name {
            "material" => Self::material(),
            "catppuccin-mocha" => Self::catppuccin_mocha(),
            other => {
                log::warn!("Unknown theme '{}', falling back to default", other);
                Self::default()
            }
        }
    }

    /// 下一个主题名称（循环）
    pub fn next_name(&self) -> &'static str {
        let idx = THEME_NAMES.iter().position(|n| *n == self.name).unwrap_or(0);
        THEME_NAMES[(idx + 1) % THEME_NAMES.len()]
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }
}

/// 按不透明度将前景色混合到背景色上（终端没有 alpha 通道）
pub fn blend(fg: Color, bg: Color, opacity: f64) -> Color {
    let t = opacity.clamp(0.0, 1.0);
    match (fg, bg) {
        (Color::Rgb(fr, fg_, fb), Color::Rgb(br, bg_, bb)) => {
            let mix = |f: u8, b: u8| (b as f64 + (f as f64 - b as f64) * t).round() as u8;
            Color::Rgb(mix(fr, br), mix(fg_, bg_), mix(fb, bb))
        }
        // 非 RGB 颜色无法插值，过半即显示前景
        _ if t >= 0.5 => fg,
        _ => bg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_by_name() {
        assert_eq!(Theme::by_name("material").palette().primary, Material::INDIGO_500);
        assert_eq!(Theme::by_name("nope").name, "catppuccin-mocha");
        assert_eq!(Theme::default().next_name(), "material");
        assert_eq!(Theme::material().next_name(), "catppuccin-mocha");
    }

    #[test]
    fn test_blend() {
        let fg = Color::Rgb(200, 100, 0);
        let bg = Color::Rgb(0, 0, 0);
        assert_eq!(blend(fg, bg, 1.0), fg);
        assert_eq!(blend(fg, bg, 0.0), bg);
        assert_eq!(blend(fg, bg, 0.5), Color::Rgb(100, 50, 0));
        assert_eq!(blend(Color::Red, bg, 0.7), Color::Red);
    }
}
