//! Win32 binding for the window and screen traits
//!
//! This module handles:
//! - Resolving the foreground window and checking it can be tiled
//! - Reading and writing a window's position, size and maximized state
//! - Finding the monitor under the cursor and its work area
//!
//! Win32 already reports window and monitor rectangles in the virtual
//! desktop space (y down, primary monitor at the origin, secondary monitors
//! at possibly negative offsets), which is the space the core expects. The
//! process must be per-monitor DPI aware for these to be real pixels; see
//! [`enable_dpi_awareness`].
//!
//! Win32 has no separate fullscreen flag for ordinary windows, so the
//! maximized state stands in for it.

use windows::Win32::Foundation::*;
use windows::Win32::Graphics::Gdi::*;
use windows::Win32::UI::HiDpi::*;
use windows::Win32::UI::WindowsAndMessaging::*;

use crate::domain::core::{Point, Rect, Size};
use crate::platform::screen::{ScreenDescriptor, ScreenResolver};
use crate::platform::window::{Attribute, PlatformError, WindowHandle, WindowProvider};

/// Opts the process into per-monitor DPI awareness
///
/// Must run before any window or monitor geometry is read.
pub fn enable_dpi_awareness() {
    unsafe {
        if SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2).is_err() {
            tracing::debug!("per-monitor DPI awareness already set or unavailable");
        }
    }
}

/// Handle to a top-level Win32 window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Win32Window {
    hwnd: HWND,
}

impl Win32Window {
    /// Wraps a window handle after checking that it is still valid
    pub fn from_hwnd(hwnd: HWND) -> Result<Self, PlatformError> {
        unsafe {
            if hwnd.0 == 0 || !IsWindow(hwnd).as_bool() {
                return Err(PlatformError::InvalidHandle);
            }
        }
        Ok(Self { hwnd })
    }

    /// Returns false for windows that can't be tiled: dialogs without a
    /// sizing border and child windows
    pub fn is_tileable(&self) -> bool {
        unsafe {
            let style = WINDOW_STYLE(GetWindowLongW(self.hwnd, GWL_STYLE) as u32);
            let is_resizable = (style & WS_THICKFRAME) != WINDOW_STYLE(0);
            let is_child = (style & WS_CHILD) != WINDOW_STYLE(0);
            is_resizable && !is_child
        }
    }

    fn window_rect(&self, attribute: Attribute) -> Result<RECT, PlatformError> {
        let mut rect = RECT::default();
        unsafe {
            GetWindowRect(self.hwnd, &mut rect).map_err(|_| PlatformError::Read(attribute))?;
        }
        Ok(rect)
    }

    fn set_window_pos(
        &self,
        x: i32,
        y: i32,
        cx: i32,
        cy: i32,
        flags: SET_WINDOW_POS_FLAGS,
        attribute: Attribute,
    ) -> Result<(), PlatformError> {
        unsafe {
            // SWP_NOACTIVATE | SWP_NOZORDER keep focus and stacking untouched
            SetWindowPos(
                self.hwnd,
                HWND(0),
                x,
                y,
                cx,
                cy,
                flags | SWP_NOACTIVATE | SWP_NOZORDER,
            )
            .map_err(|_| PlatformError::Write(attribute))
        }
    }
}

impl WindowHandle for Win32Window {
    fn position(&self) -> Result<Point, PlatformError> {
        let rect = self.window_rect(Attribute::Position)?;
        Ok(Point::new(rect.left as f64, rect.top as f64))
    }

    fn set_position(&mut self, position: Point) -> Result<(), PlatformError> {
        self.set_window_pos(
            position.x.round() as i32,
            position.y.round() as i32,
            0,
            0,
            SWP_NOSIZE,
            Attribute::Position,
        )
    }

    fn size(&self) -> Result<Size, PlatformError> {
        let rect = self.window_rect(Attribute::Size)?;
        Ok(Size::new(
            (rect.right - rect.left) as f64,
            (rect.bottom - rect.top) as f64,
        ))
    }

    fn set_size(&mut self, size: Size) -> Result<(), PlatformError> {
        self.set_window_pos(
            0,
            0,
            size.width.round() as i32,
            size.height.round() as i32,
            SWP_NOMOVE,
            Attribute::Size,
        )
    }

    fn is_fullscreen(&self) -> Result<bool, PlatformError> {
        unsafe {
            if !IsWindow(self.hwnd).as_bool() {
                return Err(PlatformError::InvalidHandle);
            }
            Ok(IsZoomed(self.hwnd).as_bool())
        }
    }

    fn set_fullscreen(&mut self, fullscreen: bool) -> Result<(), PlatformError> {
        let command = if fullscreen { SW_MAXIMIZE } else { SW_RESTORE };
        unsafe {
            // ShowWindow reports the previous visibility, not success
            let _ = ShowWindow(self.hwnd, command);
        }

        if self.is_fullscreen()? == fullscreen {
            Ok(())
        } else {
            Err(PlatformError::Write(Attribute::Fullscreen))
        }
    }
}

/// Resolves the foreground window
#[derive(Debug, Default, Clone, Copy)]
pub struct ForegroundWindowProvider;

impl WindowProvider for ForegroundWindowProvider {
    type Window = Win32Window;

    fn focused_window(&self) -> Option<Win32Window> {
        let hwnd = unsafe { GetForegroundWindow() };
        let window = Win32Window::from_hwnd(hwnd).ok()?;
        if window.is_tileable() {
            Some(window)
        } else {
            tracing::debug!(?hwnd, "foreground window is not tileable");
            None
        }
    }
}

/// Resolves the monitor under the mouse cursor
#[derive(Debug, Default, Clone, Copy)]
pub struct CursorScreenResolver;

impl ScreenResolver for CursorScreenResolver {
    fn screen_under_pointer(&self) -> Option<ScreenDescriptor> {
        let mut point = POINT::default();
        unsafe {
            GetCursorPos(&mut point).ok()?;

            let hmonitor = MonitorFromPoint(point, MONITOR_DEFAULTTONEAREST);
            if hmonitor.is_invalid() {
                return None;
            }

            let mut info = MONITORINFO {
                cbSize: std::mem::size_of::<MONITORINFO>() as u32,
                ..Default::default()
            };
            if GetMonitorInfoW(hmonitor, &mut info) == FALSE {
                return None;
            }

            Some(ScreenDescriptor::new(
                win32_rect_to_rect(&info.rcMonitor),
                win32_rect_to_rect(&info.rcWork),
            ))
        }
    }
}

/// Converts a Windows RECT to domain rectangle
pub fn win32_rect_to_rect(rect: &RECT) -> Rect {
    Rect::new(
        rect.left as f64,
        rect.top as f64,
        (rect.right - rect.left) as f64,
        (rect.bottom - rect.top) as f64,
    )
}
