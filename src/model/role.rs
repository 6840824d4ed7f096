use crate::model::label::label_enum;

label_enum! {
    /// Club role of the caller, as asserted by the authenticating gateway.
    pub enum Role ("role") {
        Admin => "admin",
        Player => "player",
        User => "user",
    }
}

impl Role {
    /// Whether this role may perform an operation requiring `required`.
    ///
    /// Admin satisfies every requirement; other roles only satisfy their own.
    pub fn satisfies(&self, required: Role) -> bool {
        *self == Role::Admin || *self == required
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}
