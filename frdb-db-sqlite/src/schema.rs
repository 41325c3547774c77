table! {
    rescue_location (rowid) {
        rowid -> BigInt,
        id -> Text,
        created_at -> BigInt,
        name -> Text,
        address -> Text,
        lat -> Double,
        lng -> Double,
        details -> Nullable<Text>,
        contact -> Nullable<Text>,
    }
}
