use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::value::Value;

/// The lifetime domain a variable set by an action is scoped to.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum Scope {
    Process,
    Session,
    Transaction,
    Request,
    Response,
}

/// A variable mutation carried back inside an ACK frame.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    SetVar {
        scope: Scope,
        name: String,
        value: Value,
    },
    UnsetVar {
        scope: Scope,
        name: String,
    },
}

impl Action {
    pub fn set_var<S: Into<String>, V: Into<Value>>(scope: Scope, name: S, value: V) -> Self {
        Action::SetVar {
            scope,
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn unset_var<S: Into<String>>(scope: Scope, name: S) -> Self {
        Action::UnsetVar {
            scope,
            name: name.into(),
        }
    }

    pub fn scope(&self) -> Scope {
        match self {
            Action::SetVar { scope, .. } | Action::UnsetVar { scope, .. } => *scope,
        }
    }
}
