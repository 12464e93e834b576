//! # 共通値オブジェクト
//!
//! ユーザーの値オブジェクトを定義する。
//!
//! ## 含まれる型
//!
//! | 型 | ラップ対象 | 用途 |
//! |---|-----------|------|
//! | [`DisplayName`] | `String` | ユーザー表示名（PII） |
//! | [`Username`] | `String` | ユーザー識別ハンドル（`username` ヘッダーの照合キー） |

define_required_string! {
    /// ユーザー表示名（値オブジェクト）
    ///
    /// 登録後は変更されない。ログに平文が出ないよう PII として扱う。
    pub struct DisplayName {
        label: "name",
        pii: true,
    }
}

define_required_string! {
    /// ユーザー名（値オブジェクト）
    ///
    /// `username` ヘッダーとの完全一致で照合するキー。
    /// 一意性はシステムでは保証しない（重複登録を許容する）。
    pub struct Username {
        label: "username",
    }
}
