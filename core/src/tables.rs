// emojipicker/core/src/tables.rs
//
// Static emoji tables, one per content category, in display order.
// Names follow the CLDR short names. Entries are (name, glyph) pairs; names
// are unique within a table.

pub(crate) static SMILEYS: &[(&str, &str)] = &[
    ("grinning face", "😀"),
    ("grinning face with big eyes", "😃"),
    ("grinning face with smiling eyes", "😄"),
    ("beaming face with smiling eyes", "😁"),
    ("grinning squinting face", "😆"),
    ("grinning face with sweat", "😅"),
    ("rolling on the floor laughing", "🤣"),
    ("face with tears of joy", "😂"),
    ("slightly smiling face", "🙂"),
    ("upside-down face", "🙃"),
    ("melting face", "🫠"),
    ("winking face", "😉"),
    ("smiling face with smiling eyes", "😊"),
    ("smiling face with halo", "😇"),
    ("smiling face with hearts", "🥰"),
    ("smiling face with heart-eyes", "😍"),
    ("star-struck", "🤩"),
    ("face blowing a kiss", "😘"),
    ("kissing face", "😗"),
    ("smiling face", "☺️"),
    ("kissing face with closed eyes", "😚"),
    ("smiling face with tear", "🥲"),
    ("face savoring food", "😋"),
    ("face with tongue", "😛"),
    ("winking face with tongue", "😜"),
    ("zany face", "🤪"),
    ("money-mouth face", "🤑"),
    ("smiling face with open hands", "🤗"),
    ("face with hand over mouth", "🤭"),
    ("shushing face", "🤫"),
    ("thinking face", "🤔"),
    ("saluting face", "🫡"),
    ("zipper-mouth face", "🤐"),
    ("face with raised eyebrow", "🤨"),
    ("neutral face", "😐"),
    ("expressionless face", "😑"),
    ("face without mouth", "😶"),
    ("face in clouds", "😶‍🌫️"),
    ("smirking face", "😏"),
    ("unamused face", "😒"),
    ("face with rolling eyes", "🙄"),
    ("grimacing face", "😬"),
    ("lying face", "🤥"),
    ("shaking face", "🫨"),
    ("relieved face", "😌"),
    ("pensive face", "😔"),
    ("sleepy face", "😪"),
    ("sleeping face", "😴"),
    ("face with medical mask", "😷"),
    ("face with thermometer", "🤒"),
    ("nauseated face", "🤢"),
    ("sneezing face", "🤧"),
    ("hot face", "🥵"),
    ("cold face", "🥶"),
    ("woozy face", "🥴"),
    ("exploding head", "🤯"),
    ("partying face", "🥳"),
    ("smiling face with sunglasses", "😎"),
    ("nerd face", "🤓"),
    ("confused face", "😕"),
    ("worried face", "😟"),
    ("face with open mouth", "😮"),
    ("astonished face", "😲"),
    ("flushed face", "😳"),
    ("pleading face", "🥺"),
    ("fearful face", "😨"),
    ("crying face", "😢"),
    ("loudly crying face", "😭"),
    ("face screaming in fear", "😱"),
    ("angry face", "😠"),
    ("enraged face", "😡"),
    ("smiling face with horns", "😈"),
    ("skull", "💀"),
    ("pile of poo", "💩"),
    ("clown face", "🤡"),
    ("ghost", "👻"),
    ("alien", "👽"),
    ("robot", "🤖"),
    ("waving hand", "👋"),
    ("ok hand", "👌"),
    ("victory hand", "✌️"),
    ("crossed fingers", "🤞"),
    ("thumbs up", "👍"),
    ("thumbs down", "👎"),
    ("clapping hands", "👏"),
    ("folded hands", "🙏"),
    ("flexed biceps", "💪"),
    ("thumbs up: medium skin tone", "👍🏽"),
    ("baby", "👶"),
    ("person", "🧑"),
    ("woman", "👩"),
    ("man", "👨"),
    ("older person", "🧓"),
    ("woman technologist", "👩‍💻"),
    ("man cook", "👨‍🍳"),
    ("family: man, woman, girl", "👨‍👩‍👧"),
];

pub(crate) static ANIMALS: &[(&str, &str)] = &[
    ("monkey face", "🐵"),
    ("gorilla", "🦍"),
    ("dog face", "🐶"),
    ("poodle", "🐩"),
    ("wolf", "🐺"),
    ("fox", "🦊"),
    ("raccoon", "🦝"),
    ("cat face", "🐱"),
    ("black cat", "🐈‍⬛"),
    ("lion", "🦁"),
    ("tiger face", "🐯"),
    ("horse face", "🐴"),
    ("racehorse", "🐎"),
    ("unicorn", "🦄"),
    ("zebra", "🦓"),
    ("cow face", "🐮"),
    ("pig face", "🐷"),
    ("boar", "🐗"),
    ("ram", "🐏"),
    ("camel", "🐪"),
    ("giraffe", "🦒"),
    ("elephant", "🐘"),
    ("mouse face", "🐭"),
    ("hamster", "🐹"),
    ("rabbit face", "🐰"),
    ("bear", "🐻"),
    ("polar bear", "🐻‍❄️"),
    ("koala", "🐨"),
    ("panda", "🐼"),
    ("paw prints", "🐾"),
    ("chicken", "🐔"),
    ("baby chick", "🐤"),
    ("penguin", "🐧"),
    ("eagle", "🦅"),
    ("duck", "🦆"),
    ("owl", "🦉"),
    ("flamingo", "🦩"),
    ("peacock", "🦚"),
    ("frog", "🐸"),
    ("crocodile", "🐊"),
    ("turtle", "🐢"),
    ("snake", "🐍"),
    ("dragon", "🐉"),
    ("spouting whale", "🐳"),
    ("dolphin", "🐬"),
    ("fish", "🐟"),
    ("tropical fish", "🐠"),
    ("shark", "🦈"),
    ("octopus", "🐙"),
    ("snail", "🐌"),
    ("butterfly", "🦋"),
    ("honeybee", "🐝"),
    ("lady beetle", "🐞"),
    ("spider", "🕷️"),
    ("bouquet", "💐"),
    ("cherry blossom", "🌸"),
    ("rose", "🌹"),
    ("sunflower", "🌻"),
    ("tulip", "🌷"),
    ("seedling", "🌱"),
    ("evergreen tree", "🌲"),
    ("palm tree", "🌴"),
    ("cactus", "🌵"),
    ("four leaf clover", "🍀"),
    ("maple leaf", "🍁"),
    ("mushroom", "🍄"),
];

pub(crate) static FOODS: &[(&str, &str)] = &[
    ("grapes", "🍇"),
    ("melon", "🍈"),
    ("watermelon", "🍉"),
    ("tangerine", "🍊"),
    ("lemon", "🍋"),
    ("banana", "🍌"),
    ("pineapple", "🍍"),
    ("mango", "🥭"),
    ("red apple", "🍎"),
    ("green apple", "🍏"),
    ("pear", "🍐"),
    ("peach", "🍑"),
    ("cherries", "🍒"),
    ("strawberry", "🍓"),
    ("blueberries", "🫐"),
    ("kiwi fruit", "🥝"),
    ("tomato", "🍅"),
    ("coconut", "🥥"),
    ("avocado", "🥑"),
    ("eggplant", "🍆"),
    ("potato", "🥔"),
    ("carrot", "🥕"),
    ("ear of corn", "🌽"),
    ("hot pepper", "🌶️"),
    ("broccoli", "🥦"),
    ("garlic", "🧄"),
    ("bread", "🍞"),
    ("croissant", "🥐"),
    ("baguette bread", "🥖"),
    ("pretzel", "🥨"),
    ("cheese wedge", "🧀"),
    ("cut of meat", "🥩"),
    ("bacon", "🥓"),
    ("hamburger", "🍔"),
    ("french fries", "🍟"),
    ("pizza", "🍕"),
    ("hot dog", "🌭"),
    ("sandwich", "🥪"),
    ("taco", "🌮"),
    ("burrito", "🌯"),
    ("cooking", "🍳"),
    ("green salad", "🥗"),
    ("popcorn", "🍿"),
    ("bento box", "🍱"),
    ("rice ball", "🍙"),
    ("cooked rice", "🍚"),
    ("curry rice", "🍛"),
    ("steaming bowl", "🍜"),
    ("spaghetti", "🍝"),
    ("sushi", "🍣"),
    ("dumpling", "🥟"),
    ("soft ice cream", "🍦"),
    ("doughnut", "🍩"),
    ("cookie", "🍪"),
    ("birthday cake", "🎂"),
    ("shortcake", "🍰"),
    ("chocolate bar", "🍫"),
    ("candy", "🍬"),
    ("honey pot", "🍯"),
    ("hot beverage", "☕"),
    ("teacup without handle", "🍵"),
    ("wine glass", "🍷"),
    ("beer mug", "🍺"),
    ("clinking beer mugs", "🍻"),
    ("tropical drink", "🍹"),
    ("bubble tea", "🧋"),
];

pub(crate) static TRAVEL: &[(&str, &str)] = &[
    ("globe showing europe-africa", "🌍"),
    ("world map", "🗺️"),
    ("snow-capped mountain", "🏔️"),
    ("volcano", "🌋"),
    ("camping", "🏕️"),
    ("beach with umbrella", "🏖️"),
    ("desert island", "🏝️"),
    ("house", "🏠"),
    ("office building", "🏢"),
    ("hospital", "🏥"),
    ("castle", "🏰"),
    ("statue of liberty", "🗽"),
    ("church", "⛪"),
    ("fountain", "⛲"),
    ("tent", "⛺"),
    ("night with stars", "🌃"),
    ("sunrise", "🌅"),
    ("ferris wheel", "🎡"),
    ("roller coaster", "🎢"),
    ("locomotive", "🚂"),
    ("high-speed train", "🚄"),
    ("metro", "🚇"),
    ("bus", "🚌"),
    ("ambulance", "🚑"),
    ("fire engine", "🚒"),
    ("police car", "🚓"),
    ("taxi", "🚕"),
    ("automobile", "🚗"),
    ("sport utility vehicle", "🚙"),
    ("delivery truck", "🚚"),
    ("racing car", "🏎️"),
    ("motorcycle", "🏍️"),
    ("bicycle", "🚲"),
    ("kick scooter", "🛴"),
    ("fuel pump", "⛽"),
    ("vertical traffic light", "🚦"),
    ("anchor", "⚓"),
    ("sailboat", "⛵"),
    ("speedboat", "🚤"),
    ("ship", "🚢"),
    ("airplane", "✈️"),
    ("airplane departure", "🛫"),
    ("parachute", "🪂"),
    ("helicopter", "🚁"),
    ("rocket", "🚀"),
    ("flying saucer", "🛸"),
    ("hourglass done", "⌛"),
    ("alarm clock", "⏰"),
    ("new moon", "🌑"),
    ("crescent moon", "🌙"),
    ("sun", "☀️"),
    ("star", "⭐"),
    ("rainbow", "🌈"),
    ("umbrella with rain drops", "☔"),
    ("high voltage", "⚡"),
    ("snowflake", "❄️"),
    ("snowman", "⛄"),
    ("fire", "🔥"),
    ("droplet", "💧"),
    ("water wave", "🌊"),
];

pub(crate) static ACTIVITIES: &[(&str, &str)] = &[
    ("jack-o-lantern", "🎃"),
    ("christmas tree", "🎄"),
    ("fireworks", "🎆"),
    ("sparkler", "🎇"),
    ("sparkles", "✨"),
    ("balloon", "🎈"),
    ("party popper", "🎉"),
    ("confetti ball", "🎊"),
    ("wrapped gift", "🎁"),
    ("ticket", "🎫"),
    ("trophy", "🏆"),
    ("sports medal", "🏅"),
    ("1st place medal", "🥇"),
    ("2nd place medal", "🥈"),
    ("3rd place medal", "🥉"),
    ("soccer ball", "⚽"),
    ("baseball", "⚾"),
    ("softball", "🥎"),
    ("basketball", "🏀"),
    ("volleyball", "🏐"),
    ("american football", "🏈"),
    ("rugby football", "🏉"),
    ("tennis", "🎾"),
    ("flying disc", "🥏"),
    ("bowling", "🎳"),
    ("cricket game", "🏏"),
    ("ice hockey", "🏒"),
    ("ping pong", "🏓"),
    ("badminton", "🏸"),
    ("boxing glove", "🥊"),
    ("martial arts uniform", "🥋"),
    ("goal net", "🥅"),
    ("flag in hole", "⛳"),
    ("ice skate", "⛸️"),
    ("fishing pole", "🎣"),
    ("running shirt", "🎽"),
    ("skis", "🎿"),
    ("sled", "🛷"),
    ("bullseye", "🎯"),
    ("yo-yo", "🪀"),
    ("kite", "🪁"),
    ("pool 8 ball", "🎱"),
    ("crystal ball", "🔮"),
    ("video game", "🎮"),
    ("joystick", "🕹️"),
    ("slot machine", "🎰"),
    ("game die", "🎲"),
    ("puzzle piece", "🧩"),
    ("teddy bear", "🧸"),
    ("chess pawn", "♟️"),
    ("joker", "🃏"),
    ("performing arts", "🎭"),
    ("artist palette", "🎨"),
    ("thread", "🧵"),
    ("yarn", "🧶"),
    ("person surfing", "🏄"),
    ("person swimming", "🏊"),
    ("person biking", "🚴"),
    ("person climbing", "🧗"),
    ("person in lotus position", "🧘"),
];

pub(crate) static OBJECTS: &[(&str, &str)] = &[
    ("glasses", "👓"),
    ("sunglasses", "🕶️"),
    ("necktie", "👔"),
    ("t-shirt", "👕"),
    ("jeans", "👖"),
    ("dress", "👗"),
    ("backpack", "🎒"),
    ("running shoe", "👟"),
    ("crown", "👑"),
    ("gem stone", "💎"),
    ("speaker high volume", "🔊"),
    ("bell", "🔔"),
    ("musical note", "🎵"),
    ("microphone", "🎤"),
    ("headphone", "🎧"),
    ("guitar", "🎸"),
    ("mobile phone", "📱"),
    ("telephone", "☎️"),
    ("battery", "🔋"),
    ("electric plug", "🔌"),
    ("laptop", "💻"),
    ("keyboard", "⌨️"),
    ("computer mouse", "🖱️"),
    ("floppy disk", "💾"),
    ("movie camera", "🎥"),
    ("television", "📺"),
    ("camera", "📷"),
    ("magnifying glass tilted left", "🔍"),
    ("light bulb", "💡"),
    ("flashlight", "🔦"),
    ("candle", "🕯️"),
    ("closed book", "📕"),
    ("books", "📚"),
    ("newspaper", "📰"),
    ("bookmark", "🔖"),
    ("money bag", "💰"),
    ("credit card", "💳"),
    ("envelope", "✉️"),
    ("package", "📦"),
    ("memo", "📝"),
    ("pencil", "✏️"),
    ("briefcase", "💼"),
    ("file folder", "📁"),
    ("calendar", "📅"),
    ("pushpin", "📌"),
    ("paperclip", "📎"),
    ("straight ruler", "📏"),
    ("scissors", "✂️"),
    ("locked", "🔒"),
    ("key", "🔑"),
    ("hammer", "🔨"),
    ("wrench", "🔧"),
    ("gear", "⚙️"),
    ("magnet", "🧲"),
    ("test tube", "🧪"),
    ("telescope", "🔭"),
    ("syringe", "💉"),
    ("pill", "💊"),
    ("door", "🚪"),
    ("bed", "🛏️"),
    ("toilet", "🚽"),
    ("shopping cart", "🛒"),
];

pub(crate) static SYMBOLS: &[(&str, &str)] = &[
    ("red heart", "❤️"),
    ("orange heart", "🧡"),
    ("yellow heart", "💛"),
    ("green heart", "💚"),
    ("blue heart", "💙"),
    ("purple heart", "💜"),
    ("black heart", "🖤"),
    ("white heart", "🤍"),
    ("broken heart", "💔"),
    ("heart on fire", "❤️‍🔥"),
    ("two hearts", "💕"),
    ("sparkling heart", "💖"),
    ("hundred points", "💯"),
    ("anger symbol", "💢"),
    ("collision", "💥"),
    ("speech balloon", "💬"),
    ("zzz", "💤"),
    ("atom symbol", "⚛️"),
    ("om", "🕉️"),
    ("star of david", "✡️"),
    ("yin yang", "☯️"),
    ("peace symbol", "☮️"),
    ("aries", "♈"),
    ("taurus", "♉"),
    ("gemini", "♊"),
    ("cancer", "♋"),
    ("leo", "♌"),
    ("virgo", "♍"),
    ("libra", "♎"),
    ("scorpio", "♏"),
    ("sagittarius", "♐"),
    ("capricorn", "♑"),
    ("aquarius", "♒"),
    ("pisces", "♓"),
    ("radioactive", "☢️"),
    ("biohazard", "☣️"),
    ("no entry", "⛔"),
    ("prohibited", "🚫"),
    ("warning", "⚠️"),
    ("recycling symbol", "♻️"),
    ("check mark button", "✅"),
    ("cross mark", "❌"),
    ("red question mark", "❓"),
    ("red exclamation mark", "❗"),
    ("double exclamation mark", "‼️"),
    ("infinity", "♾️"),
    ("copyright", "©️"),
    ("registered", "®️"),
    ("trade mark", "™️"),
    ("keycap: #", "#️⃣"),
    ("keycap: 1", "1️⃣"),
    ("keycap: 10", "🔟"),
    ("input latin letters", "🔤"),
    ("information", "ℹ️"),
    ("up arrow", "⬆️"),
    ("right arrow", "➡️"),
    ("down arrow", "⬇️"),
    ("left arrow", "⬅️"),
    ("counterclockwise arrows button", "🔄"),
    ("play button", "▶️"),
    ("pause button", "⏸️"),
    ("red circle", "🔴"),
    ("blue circle", "🔵"),
    ("black large square", "⬛"),
    ("white large square", "⬜"),
    ("chequered flag", "🏁"),
];

pub(crate) static FLAGS: &[(&str, &str)] = &[
    ("white flag", "🏳️"),
    ("black flag", "🏴"),
    ("rainbow flag", "🏳️‍🌈"),
    ("transgender flag", "🏳️‍⚧️"),
    ("pirate flag", "🏴‍☠️"),
    ("triangular flag", "🚩"),
    ("crossed flags", "🎌"),
    ("flag: united nations", "🇺🇳"),
    ("flag: european union", "🇪🇺"),
    ("flag: argentina", "🇦🇷"),
    ("flag: australia", "🇦🇺"),
    ("flag: austria", "🇦🇹"),
    ("flag: belgium", "🇧🇪"),
    ("flag: brazil", "🇧🇷"),
    ("flag: canada", "🇨🇦"),
    ("flag: chile", "🇨🇱"),
    ("flag: china", "🇨🇳"),
    ("flag: colombia", "🇨🇴"),
    ("flag: czechia", "🇨🇿"),
    ("flag: denmark", "🇩🇰"),
    ("flag: egypt", "🇪🇬"),
    ("flag: finland", "🇫🇮"),
    ("flag: france", "🇫🇷"),
    ("flag: germany", "🇩🇪"),
    ("flag: greece", "🇬🇷"),
    ("flag: india", "🇮🇳"),
    ("flag: indonesia", "🇮🇩"),
    ("flag: ireland", "🇮🇪"),
    ("flag: israel", "🇮🇱"),
    ("flag: italy", "🇮🇹"),
    ("flag: japan", "🇯🇵"),
    ("flag: kenya", "🇰🇪"),
    ("flag: mexico", "🇲🇽"),
    ("flag: netherlands", "🇳🇱"),
    ("flag: new zealand", "🇳🇿"),
    ("flag: nigeria", "🇳🇬"),
    ("flag: norway", "🇳🇴"),
    ("flag: poland", "🇵🇱"),
    ("flag: portugal", "🇵🇹"),
    ("flag: south africa", "🇿🇦"),
    ("flag: south korea", "🇰🇷"),
    ("flag: spain", "🇪🇸"),
    ("flag: sweden", "🇸🇪"),
    ("flag: switzerland", "🇨🇭"),
    ("flag: taiwan", "🇹🇼"),
    ("flag: thailand", "🇹🇭"),
    ("flag: turkey", "🇹🇷"),
    ("flag: ukraine", "🇺🇦"),
    ("flag: united kingdom", "🇬🇧"),
    ("flag: united states", "🇺🇸"),
    ("flag: vietnam", "🇻🇳"),
    ("flag: england", "🏴󠁧󠁢󠁥󠁮󠁧󠁿"),
    ("flag: scotland", "🏴󠁧󠁢󠁳󠁣󠁴󠁿"),
    ("flag: wales", "🏴󠁧󠁢󠁷󠁬󠁳󠁿"),
];
