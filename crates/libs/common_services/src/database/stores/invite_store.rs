use crate::database::DbError;
use crate::database::attendee::{Attendee, AttendeeUpsert};
use crate::database::invite::Invite;
use chrono::Utc;
use sqlx::postgres::PgQueryResult;
use sqlx::{Executor, Postgres};

pub struct InviteStore;

impl InviteStore {
    //================================================================================
    // Invite
    //================================================================================

    /// Retrieves a single invite by its ID, without attendees.
    pub async fn find_by_id(
        executor: impl Executor<'_, Database = Postgres>,
        invite_id: &str,
    ) -> Result<Option<Invite>, DbError> {
        Ok(
            sqlx::query_as::<_, Invite>("SELECT * FROM invite WHERE id = $1")
                .bind(invite_id)
                .fetch_optional(executor)
                .await?,
        )
    }

    /// Records that the invite was opened.
    ///
    /// The first open sets `first_opened_at`, every later one moves `last_opened_at`.
    /// Both cases are one statement, so two concurrent first opens can't both set
    /// `first_opened_at`. Returns `None` if the invite does not exist.
    pub async fn mark_opened(
        executor: impl Executor<'_, Database = Postgres>,
        invite_id: &str,
    ) -> Result<Option<Invite>, DbError> {
        Ok(sqlx::query_as::<_, Invite>(
            r"
            UPDATE invite
            SET
                first_opened_at = COALESCE(first_opened_at, $1),
                last_opened_at = CASE
                    WHEN first_opened_at IS NULL THEN last_opened_at
                    ELSE $1
                END
            WHERE id = $2
            RETURNING *
            ",
        )
        .bind(Utc::now())
        .bind(invite_id)
        .fetch_optional(executor)
        .await?)
    }

    /// Sets the RSVP flag. Updating an invite that doesn't exist affects zero rows
    /// and is not an error.
    pub async fn set_rsvp(
        executor: impl Executor<'_, Database = Postgres>,
        invite_id: &str,
        rsvp: bool,
    ) -> Result<PgQueryResult, DbError> {
        Ok(
            sqlx::query("UPDATE invite SET rsvp = $1, updated_at = $2 WHERE id = $3")
                .bind(rsvp)
                .bind(Utc::now())
                .bind(invite_id)
                .execute(executor)
                .await?,
        )
    }

    //================================================================================
    // Attendees
    //================================================================================

    /// All attendees of an invite, in storage order.
    pub async fn list_attendees(
        executor: impl Executor<'_, Database = Postgres>,
        invite_id: &str,
    ) -> Result<Vec<Attendee>, DbError> {
        Ok(
            sqlx::query_as::<_, Attendee>("SELECT * FROM attendee WHERE invite_id = $1")
                .bind(invite_id)
                .fetch_all(executor)
                .await?,
        )
    }

    /// Inserts an attendee, or overwrites it when the id already exists.
    ///
    /// An existing row is only overwritten if it belongs to `invite_id`, otherwise
    /// zero rows are affected.
    pub async fn upsert_attendee(
        executor: impl Executor<'_, Database = Postgres>,
        invite_id: &str,
        attendee: &AttendeeUpsert,
    ) -> Result<PgQueryResult, DbError> {
        Ok(sqlx::query(
            r"
            INSERT INTO attendee (id, invite_id, name, email, phone, age, is_child, active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                email = EXCLUDED.email,
                phone = EXCLUDED.phone,
                age = EXCLUDED.age,
                is_child = EXCLUDED.is_child,
                active = EXCLUDED.active,
                updated_at = EXCLUDED.created_at
            WHERE attendee.invite_id = EXCLUDED.invite_id
            ",
        )
        .bind(&attendee.id)
        .bind(invite_id)
        .bind(&attendee.name)
        .bind(&attendee.email)
        .bind(&attendee.phone)
        .bind(attendee.age)
        .bind(attendee.is_child)
        .bind(attendee.active)
        .bind(Utc::now())
        .execute(executor)
        .await?)
    }
}
