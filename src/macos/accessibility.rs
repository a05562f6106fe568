use crate::keys::{self, AxKey};
use core_foundation::base::TCFType;
use core_foundation::string::{CFString, CFStringRef};
use std::fmt;

#[link(name = "ApplicationServices", kind = "framework")]
extern "C" {
    static kAXTrustedCheckOptionPrompt: CFStringRef;
}

/// Accessibility attribute or option key owned by the framework
///
/// Compares by `CFEqual`, never by pointer or contents layout. Pass
/// [`AttributeKey::as_concrete_TypeRef`] unmodified into framework calls such as
/// `AXUIElementCopyAttributeValue` or an `AXIsProcessTrustedWithOptions` dictionary.
#[derive(Clone, PartialEq, Eq)]
pub struct AttributeKey(CFString);

impl AttributeKey {
    /// Borrow the key as a Core Foundation string
    pub fn as_cf_string(&self) -> &CFString {
        &self.0
    }

    /// Raw reference for framework calls; valid for as long as `self` is alive
    #[allow(non_snake_case)]
    pub fn as_concrete_TypeRef(&self) -> CFStringRef {
        self.0.as_concrete_TypeRef()
    }

    pub fn into_cf_string(self) -> CFString {
        self.0
    }
}

impl fmt::Debug for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AttributeKey").field(&self.0.to_string()).finish()
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<AttributeKey> for CFString {
    fn from(key: AttributeKey) -> Self {
        key.0
    }
}

// The attribute keys are CFSTR() literals in the HIServices headers and have no
// exported symbol, so the same literal is materialised here instead.
macro_rules! literal_key {
    ($(#[$meta:meta])* $name:ident, $value:expr) => {
        $(#[$meta])*
        pub fn $name() -> AttributeKey {
            AttributeKey(CFString::from_static_string($value))
        }
    };
}

literal_key!(
    /// `kAXFocusedApplicationAttribute`: the currently focused application
    focused_application_attribute,
    keys::FOCUSED_APPLICATION_ATTRIBUTE
);

literal_key!(
    /// `kAXFocusedWindowAttribute`: the currently focused window
    focused_window_attribute,
    keys::FOCUSED_WINDOW_ATTRIBUTE
);

literal_key!(
    /// `kAXPositionAttribute`: a window's on-screen position
    position_attribute,
    keys::POSITION_ATTRIBUTE
);

literal_key!(
    /// `kAXSizeAttribute`: a window's on-screen size
    size_attribute,
    keys::SIZE_ATTRIBUTE
);

/// `kAXTrustedCheckOptionPrompt`: options key asking the OS to show the trust prompt
pub fn trusted_check_option_prompt() -> AttributeKey {
    // The symbol is resolved by the dynamic linker before main and lives for the
    // whole process; a missing framework fails at load time, never here.
    AttributeKey(unsafe { CFString::wrap_under_get_rule(kAXTrustedCheckOptionPrompt) })
}

impl AxKey {
    /// Fetch the framework key this entry names
    pub fn resolve(self) -> AttributeKey {
        match self {
            AxKey::FocusedApplication => focused_application_attribute(),
            AxKey::FocusedWindow => focused_window_attribute(),
            AxKey::Position => position_attribute(),
            AxKey::Size => size_attribute(),
            AxKey::TrustedCheckOptionPrompt => trusted_check_option_prompt(),
        }
    }
}
