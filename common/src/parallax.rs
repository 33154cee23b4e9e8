//! セクション背景のパララックス
//!
//! 画面中央付近の帯に入っているセクションを「現在のセクション」として追い、
//! スクロールごとにその中心と画面中心の差から背景モチーフのずれ量を出す。
//! スクロール中の再計算は1フレームに1回まで（frame_pending で束ねる）。

use crate::config::RendererConfig;

/// ずれ量の計算パラメータ
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftSettings {
    pub max_px: f64,
    pub x_ratio: f64,
}

impl DriftSettings {
    pub fn from_config(config: &RendererConfig) -> Self {
        Self {
            max_px: config.drift_max_px,
            x_ratio: config.drift_x_ratio,
        }
    }
}

impl Default for DriftSettings {
    fn default() -> Self {
        Self { max_px: 14.0, x_ratio: 0.6 }
    }
}

/// ビューポート座標での要素の上下端
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub bottom: f64,
}

/// 背景モチーフのずれ量(px)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftOffset {
    pub x: f64,
    pub y: f64,
}

impl DriftOffset {
    pub const X_PROPERTY: &'static str = "--bg-shift-x";
    pub const Y_PROPERTY: &'static str = "--bg-shift-y";

    pub fn css_x(&self) -> String {
        css_px(self.x)
    }

    pub fn css_y(&self) -> String {
        css_px(self.y)
    }
}

/// 小数1桁の px 表記
///
/// ちょうど中間の値は 0 から遠い側へ丸める。-0.0 は 0.0 に寄せる。
fn css_px(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    format!("{:.1}px", rounded + 0.0)
}

/// 画面中心からの距離を [-1, 1] 程度に正規化し、ずれ量に変換する
///
/// 縦 = `-norm * max`、横 = `norm * max * x_ratio`
pub fn drift_offset(rect: SectionRect, viewport_height: f64, settings: DriftSettings) -> DriftOffset {
    if viewport_height <= 0.0 {
        return DriftOffset { x: 0.0, y: 0.0 };
    }
    let half = viewport_height / 2.0;
    let y_mid = (rect.top + rect.bottom) / 2.0;
    let norm = (y_mid - half) / half;

    DriftOffset {
        x: norm * settings.max_px * settings.x_ratio,
        y: -norm * settings.max_px,
    }
}

#[derive(Debug, Clone)]
pub struct ParallaxController {
    settings: DriftSettings,
    enabled: bool,
    current: Option<usize>,
    frame_pending: bool,
}

impl ParallaxController {
    /// モーション抑制時は無効（何もしない）
    pub fn new(settings: DriftSettings, reduced_motion: bool) -> Self {
        Self {
            settings,
            enabled: !reduced_motion,
            current: None,
            frame_pending: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    /// フォーカス帯の交差通知（1回のコールバック分）
    ///
    /// `(セクション, 交差中か)` の並び。交差中のものが複数あれば最後が勝つ。
    pub fn on_band_entries<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (usize, bool)>,
    {
        if !self.enabled {
            return;
        }
        for (section, intersecting) in entries {
            if intersecting {
                self.current = Some(section);
            }
        }
    }

    /// スクロール通知。フレームを予約すべきなら true
    pub fn on_scroll(&mut self) -> bool {
        if !self.enabled || self.current.is_none() || self.frame_pending {
            return false;
        }
        self.frame_pending = true;
        true
    }

    /// 予約フレームの処理
    ///
    /// `measure` で現在のセクションの位置を測り、ずれ量を返す。
    /// 結果に関係なく予約は解除される。
    pub fn on_frame<F>(&mut self, viewport_height: f64, measure: F) -> Option<(usize, DriftOffset)>
    where
        F: FnOnce(usize) -> Option<SectionRect>,
    {
        self.frame_pending = false;
        let section = self.current?;
        let rect = measure(section)?;
        Some((section, drift_offset(rect, viewport_height, self.settings)))
    }
}
