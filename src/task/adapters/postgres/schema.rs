//! Diesel schema for task persistence and the directories it reads.

diesel::table! {
    /// Task records owned by a user and placed in a workflow status.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Workflow status reference.
        status_id -> Uuid,
        /// Due date and time without timezone.
        due -> Timestamp,
        /// Owning user reference.
        owner_id -> Uuid,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Status taxonomy provisioned outside the task core.
    statuses (id) {
        /// Status identifier.
        id -> Uuid,
        /// Unique status name.
        #[max_length = 100]
        name -> Varchar,
        /// Whether the taxonomy marks this status as the default.
        is_default -> Bool,
    }
}

diesel::table! {
    /// User records provisioned by the authentication collaborator.
    users (id) {
        /// User identifier.
        id -> Uuid,
        /// Display name.
        #[max_length = 255]
        name -> Varchar,
        /// Email address.
        #[max_length = 255]
        email -> Varchar,
    }
}
