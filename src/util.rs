// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

// Every codebase needs a `util` module.

// Vectors may be handed across threads, so node handles have to be
// counted atomically.
use std::sync::Arc;
pub type Ref<A> = Arc<A>;
