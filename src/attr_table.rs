// @generated public framework attribute ids (`android.R.attr`), sorted by id.
// Regenerate instead of editing by hand; ids without a public name are left out.
[
    (0x0101_0000, "theme"),
    (0x0101_0001, "label"),
    (0x0101_0002, "icon"),
    (0x0101_0003, "name"),
    (0x0101_0004, "manageSpaceActivity"),
    (0x0101_0005, "allowClearUserData"),
    (0x0101_0006, "permission"),
    (0x0101_0007, "readPermission"),
    (0x0101_0008, "writePermission"),
    (0x0101_0009, "protectionLevel"),
    (0x0101_000a, "permissionGroup"),
    (0x0101_000b, "sharedUserId"),
    (0x0101_000c, "hasCode"),
    (0x0101_000d, "persistent"),
    (0x0101_000e, "enabled"),
    (0x0101_000f, "debuggable"),
    (0x0101_0010, "exported"),
    (0x0101_0011, "process"),
    (0x0101_0012, "taskAffinity"),
    (0x0101_0013, "multiprocess"),
    (0x0101_0014, "finishOnTaskLaunch"),
    (0x0101_0015, "clearTaskOnLaunch"),
    (0x0101_0016, "stateNotNeeded"),
    (0x0101_0017, "excludeFromRecents"),
    (0x0101_0018, "authorities"),
    (0x0101_0019, "syncable"),
    (0x0101_001a, "initOrder"),
    (0x0101_001b, "grantUriPermissions"),
    (0x0101_001c, "priority"),
    (0x0101_001d, "launchMode"),
    (0x0101_001e, "screenOrientation"),
    (0x0101_001f, "configChanges"),
    (0x0101_0020, "description"),
    (0x0101_0021, "targetPackage"),
    (0x0101_0022, "handleProfiling"),
    (0x0101_0023, "functionalTest"),
    (0x0101_0024, "value"),
    (0x0101_0025, "resource"),
    (0x0101_0026, "mimeType"),
    (0x0101_0027, "scheme"),
    (0x0101_0028, "host"),
    (0x0101_0029, "port"),
    (0x0101_002a, "path"),
    (0x0101_002b, "pathPrefix"),
    (0x0101_002c, "pathPattern"),
    (0x0101_002d, "action"),
    (0x0101_002e, "data"),
    (0x0101_002f, "targetClass"),
    (0x0101_0030, "colorForeground"),
    (0x0101_0031, "colorBackground"),
    (0x0101_0032, "backgroundDimAmount"),
    (0x0101_0033, "disabledAlpha"),
    (0x0101_0034, "textAppearance"),
    (0x0101_0035, "textAppearanceInverse"),
    (0x0101_0036, "textColorPrimary"),
    (0x0101_0037, "textColorPrimaryDisableOnly"),
    (0x0101_0038, "textColorSecondary"),
    (0x0101_0039, "textColorPrimaryInverse"),
    (0x0101_003a, "textColorSecondaryInverse"),
    (0x0101_003b, "textColorPrimaryNoDisable"),
    (0x0101_003c, "textColorSecondaryNoDisable"),
    (0x0101_003d, "textColorPrimaryInverseNoDisable"),
    (0x0101_003e, "textColorSecondaryInverseNoDisable"),
    (0x0101_003f, "textColorHintInverse"),
    (0x0101_0040, "textAppearanceLarge"),
    (0x0101_0041, "textAppearanceMedium"),
    (0x0101_0042, "textAppearanceSmall"),
    (0x0101_0043, "textAppearanceLargeInverse"),
    (0x0101_0044, "textAppearanceMediumInverse"),
    (0x0101_0045, "textAppearanceSmallInverse"),
    (0x0101_0046, "textCheckMark"),
    (0x0101_0047, "textCheckMarkInverse"),
    (0x0101_0048, "buttonStyle"),
    (0x0101_0049, "buttonStyleSmall"),
    (0x0101_004a, "buttonStyleInset"),
    (0x0101_004b, "buttonStyleToggle"),
    (0x0101_004c, "galleryItemBackground"),
    (0x0101_004d, "listPreferredItemHeight"),
    (0x0101_004e, "expandableListPreferredItemPaddingLeft"),
    (0x0101_004f, "expandableListPreferredChildPaddingLeft"),
    (0x0101_0050, "expandableListPreferredItemIndicatorLeft"),
    (0x0101_0051, "expandableListPreferredItemIndicatorRight"),
    (0x0101_0052, "expandableListPreferredChildIndicatorLeft"),
    (0x0101_0053, "expandableListPreferredChildIndicatorRight"),
    (0x0101_0054, "windowBackground"),
    (0x0101_0055, "windowFrame"),
    (0x0101_0056, "windowNoTitle"),
    (0x0101_0057, "windowIsFloating"),
    (0x0101_0058, "windowIsTranslucent"),
    (0x0101_0059, "windowContentOverlay"),
    (0x0101_005a, "windowTitleSize"),
    (0x0101_005b, "windowTitleStyle"),
    (0x0101_005c, "windowTitleBackgroundStyle"),
    (0x0101_005d, "alertDialogStyle"),
    (0x0101_005e, "panelBackground"),
    (0x0101_005f, "panelFullBackground"),
    (0x0101_0060, "panelColorForeground"),
    (0x0101_0061, "panelColorBackground"),
    (0x0101_0062, "panelTextAppearance"),
    (0x0101_0063, "scrollbarSize"),
    (0x0101_0064, "scrollbarThumbHorizontal"),
    (0x0101_0065, "scrollbarThumbVertical"),
    (0x0101_0066, "scrollbarTrackHorizontal"),
    (0x0101_0067, "scrollbarTrackVertical"),
    (0x0101_0068, "scrollbarAlwaysDrawHorizontalTrack"),
    (0x0101_0069, "scrollbarAlwaysDrawVerticalTrack"),
    (0x0101_006a, "absListViewStyle"),
    (0x0101_006b, "autoCompleteTextViewStyle"),
    (0x0101_006c, "checkboxStyle"),
    (0x0101_006d, "dropDownListViewStyle"),
    (0x0101_006e, "editTextStyle"),
    (0x0101_006f, "expandableListViewStyle"),
    (0x0101_0070, "galleryStyle"),
    (0x0101_0071, "gridViewStyle"),
    (0x0101_0072, "imageButtonStyle"),
    (0x0101_0073, "imageWellStyle"),
    (0x0101_0074, "listViewStyle"),
    (0x0101_0075, "listViewWhiteStyle"),
    (0x0101_0076, "popupWindowStyle"),
    (0x0101_0077, "progressBarStyle"),
    (0x0101_0078, "progressBarStyleHorizontal"),
    (0x0101_0079, "progressBarStyleSmall"),
    (0x0101_007a, "progressBarStyleLarge"),
    (0x0101_007b, "seekBarStyle"),
    (0x0101_007c, "ratingBarStyle"),
    (0x0101_007d, "ratingBarStyleSmall"),
    (0x0101_007e, "radioButtonStyle"),
    (0x0101_007f, "scrollbarStyle"),
    (0x0101_0080, "scrollViewStyle"),
    (0x0101_0081, "spinnerStyle"),
    (0x0101_0082, "starStyle"),
    (0x0101_0083, "tabWidgetStyle"),
    (0x0101_0084, "textViewStyle"),
    (0x0101_0085, "webViewStyle"),
    (0x0101_0086, "dropDownItemStyle"),
    (0x0101_0087, "spinnerDropDownItemStyle"),
    (0x0101_0088, "dropDownHintAppearance"),
    (0x0101_0089, "spinnerItemStyle"),
    (0x0101_008a, "mapViewStyle"),
    (0x0101_008b, "preferenceScreenStyle"),
    (0x0101_008c, "preferenceCategoryStyle"),
    (0x0101_008d, "preferenceInformationStyle"),
    (0x0101_008e, "preferenceStyle"),
    (0x0101_008f, "checkBoxPreferenceStyle"),
    (0x0101_0090, "yesNoPreferenceStyle"),
    (0x0101_0091, "dialogPreferenceStyle"),
    (0x0101_0092, "editTextPreferenceStyle"),
    (0x0101_0093, "ringtonePreferenceStyle"),
    (0x0101_0094, "preferenceLayoutChild"),
    (0x0101_0095, "textSize"),
    (0x0101_0096, "typeface"),
    (0x0101_0097, "textStyle"),
    (0x0101_0098, "textColor"),
    (0x0101_0099, "textColorHighlight"),
    (0x0101_009a, "textColorHint"),
    (0x0101_009b, "textColorLink"),
    (0x0101_009c, "state_focused"),
    (0x0101_009d, "state_window_focused"),
    (0x0101_009e, "state_enabled"),
    (0x0101_009f, "state_checkable"),
    (0x0101_00a0, "state_checked"),
    (0x0101_00a1, "state_selected"),
    (0x0101_00a2, "state_active"),
    (0x0101_00a3, "state_single"),
    (0x0101_00a4, "state_first"),
    (0x0101_00a5, "state_middle"),
    (0x0101_00a6, "state_last"),
    (0x0101_00a7, "state_pressed"),
    (0x0101_00a8, "state_expanded"),
    (0x0101_00a9, "state_empty"),
    (0x0101_00aa, "state_above_anchor"),
    (0x0101_00ab, "ellipsize"),
    (0x0101_00ac, "x"),
    (0x0101_00ad, "y"),
    (0x0101_00ae, "windowAnimationStyle"),
    (0x0101_00af, "gravity"),
    (0x0101_00b0, "autoLink"),
    (0x0101_00b1, "linksClickable"),
    (0x0101_00b2, "entries"),
    (0x0101_00b3, "layout_gravity"),
    (0x0101_00b4, "windowEnterAnimation"),
    (0x0101_00b5, "windowExitAnimation"),
    (0x0101_00b6, "windowShowAnimation"),
    (0x0101_00b7, "windowHideAnimation"),
    (0x0101_00b8, "activityOpenEnterAnimation"),
    (0x0101_00b9, "activityOpenExitAnimation"),
    (0x0101_00ba, "activityCloseEnterAnimation"),
    (0x0101_00bb, "activityCloseExitAnimation"),
    (0x0101_00bc, "taskOpenEnterAnimation"),
    (0x0101_00bd, "taskOpenExitAnimation"),
    (0x0101_00be, "taskCloseEnterAnimation"),
    (0x0101_00bf, "taskCloseExitAnimation"),
    (0x0101_00c0, "taskToFrontEnterAnimation"),
    (0x0101_00c1, "taskToFrontExitAnimation"),
    (0x0101_00c2, "taskToBackEnterAnimation"),
    (0x0101_00c3, "taskToBackExitAnimation"),
    (0x0101_00c4, "orientation"),
    (0x0101_00c5, "keycode"),
    (0x0101_00c6, "fullDark"),
    (0x0101_00c7, "topDark"),
    (0x0101_00c8, "centerDark"),
    (0x0101_00c9, "bottomDark"),
    (0x0101_00ca, "fullBright"),
    (0x0101_00cb, "topBright"),
    (0x0101_00cc, "centerBright"),
    (0x0101_00cd, "bottomBright"),
    (0x0101_00ce, "bottomMedium"),
    (0x0101_00cf, "centerMedium"),
    (0x0101_00d0, "id"),
    (0x0101_00d1, "tag"),
    (0x0101_00d2, "scrollX"),
    (0x0101_00d3, "scrollY"),
    (0x0101_00d4, "background"),
    (0x0101_00d5, "padding"),
    (0x0101_00d6, "paddingLeft"),
    (0x0101_00d7, "paddingTop"),
    (0x0101_00d8, "paddingRight"),
    (0x0101_00d9, "paddingBottom"),
    (0x0101_00da, "focusable"),
    (0x0101_00db, "focusableInTouchMode"),
    (0x0101_00dc, "visibility"),
    (0x0101_00dd, "fitsSystemWindows"),
    (0x0101_00de, "scrollbars"),
    (0x0101_00df, "fadingEdge"),
    (0x0101_00e0, "fadingEdgeLength"),
    (0x0101_00e1, "nextFocusLeft"),
    (0x0101_00e2, "nextFocusRight"),
    (0x0101_00e3, "nextFocusUp"),
    (0x0101_00e4, "nextFocusDown"),
    (0x0101_00e5, "clickable"),
    (0x0101_00e6, "longClickable"),
    (0x0101_00e7, "saveEnabled"),
    (0x0101_00e8, "drawingCacheQuality"),
    (0x0101_00e9, "duplicateParentState"),
    (0x0101_00ea, "clipChildren"),
    (0x0101_00eb, "clipToPadding"),
    (0x0101_00ec, "layoutAnimation"),
    (0x0101_00ed, "animationCache"),
    (0x0101_00ee, "persistentDrawingCache"),
    (0x0101_00ef, "alwaysDrawnWithCache"),
    (0x0101_00f0, "addStatesFromChildren"),
    (0x0101_00f1, "descendantFocusability"),
    (0x0101_00f2, "layout"),
    (0x0101_00f3, "inflatedId"),
    (0x0101_00f4, "layout_width"),
    (0x0101_00f5, "layout_height"),
    (0x0101_00f6, "layout_margin"),
    (0x0101_00f7, "layout_marginLeft"),
    (0x0101_00f8, "layout_marginTop"),
    (0x0101_00f9, "layout_marginRight"),
    (0x0101_00fa, "layout_marginBottom"),
    (0x0101_00fb, "listSelector"),
    (0x0101_00fc, "drawSelectorOnTop"),
    (0x0101_00fd, "stackFromBottom"),
    (0x0101_00fe, "scrollingCache"),
    (0x0101_00ff, "textFilterEnabled"),
    (0x0101_0100, "transcriptMode"),
    (0x0101_0101, "cacheColorHint"),
    (0x0101_0102, "dial"),
    (0x0101_0103, "hand_hour"),
    (0x0101_0104, "hand_minute"),
    (0x0101_0105, "format"),
    (0x0101_0106, "checked"),
    (0x0101_0107, "button"),
    (0x0101_0108, "checkMark"),
    (0x0101_0109, "foreground"),
    (0x0101_010a, "measureAllChildren"),
    (0x0101_010b, "groupIndicator"),
    (0x0101_010c, "childIndicator"),
    (0x0101_010d, "indicatorLeft"),
    (0x0101_010e, "indicatorRight"),
    (0x0101_010f, "childIndicatorLeft"),
    (0x0101_0110, "childIndicatorRight"),
    (0x0101_0111, "childDivider"),
    (0x0101_0112, "animationDuration"),
    (0x0101_0113, "spacing"),
    (0x0101_0114, "horizontalSpacing"),
    (0x0101_0115, "verticalSpacing"),
    (0x0101_0116, "stretchMode"),
    (0x0101_0117, "columnWidth"),
    (0x0101_0118, "numColumns"),
    (0x0101_0119, "src"),
    (0x0101_011a, "antialias"),
    (0x0101_011b, "filter"),
    (0x0101_011c, "dither"),
    (0x0101_011d, "scaleType"),
    (0x0101_011e, "adjustViewBounds"),
    (0x0101_011f, "maxWidth"),
    (0x0101_0120, "maxHeight"),
    (0x0101_0121, "tint"),
    (0x0101_0122, "baselineAlignBottom"),
    (0x0101_0123, "cropToPadding"),
    (0x0101_0124, "textOn"),
    (0x0101_0125, "textOff"),
    (0x0101_0126, "baselineAligned"),
    (0x0101_0127, "baselineAlignedChildIndex"),
    (0x0101_0128, "weightSum"),
    (0x0101_0129, "divider"),
    (0x0101_012a, "dividerHeight"),
    (0x0101_012b, "choiceMode"),
    (0x0101_012c, "itemTextAppearance"),
    (0x0101_012d, "horizontalDivider"),
    (0x0101_012e, "verticalDivider"),
    (0x0101_012f, "headerBackground"),
    (0x0101_0130, "itemBackground"),
    (0x0101_0131, "itemIconDisabledAlpha"),
    (0x0101_0132, "rowHeight"),
    (0x0101_0133, "maxRows"),
    (0x0101_0134, "maxItemsPerRow"),
    (0x0101_0135, "moreIcon"),
    (0x0101_0136, "max"),
    (0x0101_0137, "progress"),
    (0x0101_0138, "secondaryProgress"),
    (0x0101_0139, "indeterminate"),
    (0x0101_013a, "indeterminateOnly"),
    (0x0101_013b, "indeterminateDrawable"),
    (0x0101_013c, "progressDrawable"),
    (0x0101_013d, "indeterminateDuration"),
    (0x0101_013e, "indeterminateBehavior"),
    (0x0101_013f, "minWidth"),
    (0x0101_0140, "minHeight"),
    (0x0101_0141, "interpolator"),
    (0x0101_0142, "thumb"),
    (0x0101_0143, "thumbOffset"),
    (0x0101_0144, "numStars"),
    (0x0101_0145, "rating"),
    (0x0101_0146, "stepSize"),
    (0x0101_0147, "isIndicator"),
    (0x0101_0148, "checkedButton"),
    (0x0101_0149, "stretchColumns"),
    (0x0101_014a, "shrinkColumns"),
    (0x0101_014b, "collapseColumns"),
    (0x0101_014c, "layout_column"),
    (0x0101_014d, "layout_span"),
    (0x0101_014e, "bufferType"),
    (0x0101_014f, "text"),
    (0x0101_0150, "hint"),
    (0x0101_0151, "textScaleX"),
    (0x0101_0152, "cursorVisible"),
    (0x0101_0153, "maxLines"),
    (0x0101_0154, "lines"),
    (0x0101_0155, "height"),
    (0x0101_0156, "minLines"),
    (0x0101_0157, "maxEms"),
    (0x0101_0158, "ems"),
    (0x0101_0159, "width"),
    (0x0101_015a, "minEms"),
    (0x0101_015b, "scrollHorizontally"),
    (0x0101_015c, "password"),
    (0x0101_015d, "singleLine"),
    (0x0101_015e, "selectAllOnFocus"),
    (0x0101_015f, "includeFontPadding"),
    (0x0101_0160, "maxLength"),
    (0x0101_0161, "shadowColor"),
    (0x0101_0162, "shadowDx"),
    (0x0101_0163, "shadowDy"),
    (0x0101_0164, "shadowRadius"),
    (0x0101_0165, "numeric"),
    (0x0101_0166, "digits"),
    (0x0101_0167, "phoneNumber"),
    (0x0101_0168, "inputMethod"),
    (0x0101_0169, "capitalize"),
    (0x0101_016a, "autoText"),
    (0x0101_016b, "editable"),
    (0x0101_016c, "freezesText"),
    (0x0101_016d, "drawableTop"),
    (0x0101_016e, "drawableBottom"),
    (0x0101_016f, "drawableLeft"),
    (0x0101_0170, "drawableRight"),
    (0x0101_0171, "drawablePadding"),
    (0x0101_0172, "completionHint"),
    (0x0101_0173, "completionHintView"),
    (0x0101_0174, "completionThreshold"),
    (0x0101_0175, "dropDownSelector"),
    (0x0101_0176, "popupBackground"),
    (0x0101_0177, "inAnimation"),
    (0x0101_0178, "outAnimation"),
    (0x0101_0179, "flipInterval"),
    (0x0101_017a, "fillViewport"),
    (0x0101_017b, "prompt"),
    (0x0101_017c, "startYear"),
    (0x0101_017d, "endYear"),
    (0x0101_017e, "mode"),
    (0x0101_017f, "layout_x"),
    (0x0101_0180, "layout_y"),
    (0x0101_0181, "layout_weight"),
    (0x0101_0182, "layout_toLeftOf"),
    (0x0101_0183, "layout_toRightOf"),
    (0x0101_0184, "layout_above"),
    (0x0101_0185, "layout_below"),
    (0x0101_0186, "layout_alignBaseline"),
    (0x0101_0187, "layout_alignLeft"),
    (0x0101_0188, "layout_alignTop"),
    (0x0101_0189, "layout_alignRight"),
    (0x0101_018a, "layout_alignBottom"),
    (0x0101_018b, "layout_alignParentLeft"),
    (0x0101_018c, "layout_alignParentTop"),
    (0x0101_018d, "layout_alignParentRight"),
    (0x0101_018e, "layout_alignParentBottom"),
    (0x0101_018f, "layout_centerInParent"),
    (0x0101_0190, "layout_centerHorizontal"),
    (0x0101_0191, "layout_centerVertical"),
    (0x0101_0192, "layout_alignWithParentIfMissing"),
    (0x0101_0193, "layout_scale"),
    (0x0101_0194, "visible"),
    (0x0101_0195, "variablePadding"),
    (0x0101_0196, "constantSize"),
    (0x0101_0197, "oneshot"),
    (0x0101_0198, "duration"),
    (0x0101_0199, "drawable"),
    (0x0101_019a, "shape"),
    (0x0101_019b, "innerRadiusRatio"),
    (0x0101_019c, "thicknessRatio"),
    (0x0101_019d, "startColor"),
    (0x0101_019e, "endColor"),
    (0x0101_019f, "useLevel"),
    (0x0101_01a0, "angle"),
    (0x0101_01a1, "type"),
    (0x0101_01a2, "centerX"),
    (0x0101_01a3, "centerY"),
    (0x0101_01a4, "gradientRadius"),
    (0x0101_01a5, "color"),
    (0x0101_01a6, "dashWidth"),
    (0x0101_01a7, "dashGap"),
    (0x0101_01a8, "radius"),
    (0x0101_01a9, "topLeftRadius"),
    (0x0101_01aa, "topRightRadius"),
    (0x0101_01ab, "bottomLeftRadius"),
    (0x0101_01ac, "bottomRightRadius"),
    (0x0101_01ad, "left"),
    (0x0101_01ae, "top"),
    (0x0101_01af, "right"),
    (0x0101_01b0, "bottom"),
    (0x0101_01b1, "minLevel"),
    (0x0101_01b2, "maxLevel"),
    (0x0101_01b3, "fromDegrees"),
    (0x0101_01b4, "toDegrees"),
    (0x0101_01b5, "pivotX"),
    (0x0101_01b6, "pivotY"),
    (0x0101_01b7, "insetLeft"),
    (0x0101_01b8, "insetRight"),
    (0x0101_01b9, "insetTop"),
    (0x0101_01ba, "insetBottom"),
    (0x0101_01bb, "shareInterpolator"),
    (0x0101_01bc, "fillBefore"),
    (0x0101_01bd, "fillAfter"),
    (0x0101_01be, "startOffset"),
    (0x0101_01bf, "repeatCount"),
    (0x0101_01c0, "repeatMode"),
    (0x0101_01c1, "zAdjustment"),
    (0x0101_01c2, "fromXScale"),
    (0x0101_01c3, "toXScale"),
    (0x0101_01c4, "fromYScale"),
    (0x0101_01c5, "toYScale"),
    (0x0101_01c6, "fromXDelta"),
    (0x0101_01c7, "toXDelta"),
    (0x0101_01c8, "fromYDelta"),
    (0x0101_01c9, "toYDelta"),
    (0x0101_01ca, "fromAlpha"),
    (0x0101_01cb, "toAlpha"),
    (0x0101_01cc, "delay"),
    (0x0101_01cd, "animation"),
    (0x0101_01ce, "animationOrder"),
    (0x0101_01cf, "columnDelay"),
    (0x0101_01d0, "rowDelay"),
    (0x0101_01d1, "direction"),
    (0x0101_01d2, "directionPriority"),
    (0x0101_01d3, "factor"),
    (0x0101_01d4, "cycles"),
    (0x0101_01d5, "searchMode"),
    (0x0101_01d6, "searchSuggestAuthority"),
    (0x0101_01d7, "searchSuggestPath"),
    (0x0101_01d8, "searchSuggestSelection"),
    (0x0101_01d9, "searchSuggestIntentAction"),
    (0x0101_01da, "searchSuggestIntentData"),
    (0x0101_01db, "queryActionMsg"),
    (0x0101_01dc, "suggestActionMsg"),
    (0x0101_01dd, "suggestActionMsgColumn"),
    (0x0101_01de, "menuCategory"),
    (0x0101_01df, "orderInCategory"),
    (0x0101_01e0, "checkBehavior"),
    (0x0101_01e1, "title"),
    (0x0101_01e2, "titleCondensed"),
    (0x0101_01e3, "alphabeticShortcut"),
    (0x0101_01e4, "numericShortcut"),
    (0x0101_01e5, "checkable"),
    (0x0101_01e6, "selectable"),
    (0x0101_01e7, "orderingFromXml"),
    (0x0101_01e8, "key"),
    (0x0101_01e9, "summary"),
    (0x0101_01ea, "order"),
    (0x0101_01eb, "widgetLayout"),
    (0x0101_01ec, "dependency"),
    (0x0101_01ed, "defaultValue"),
    (0x0101_01ee, "shouldDisableView"),
    (0x0101_01ef, "summaryOn"),
    (0x0101_01f0, "summaryOff"),
    (0x0101_01f1, "disableDependentsState"),
    (0x0101_01f2, "dialogTitle"),
    (0x0101_01f3, "dialogMessage"),
    (0x0101_01f4, "dialogIcon"),
    (0x0101_01f5, "positiveButtonText"),
    (0x0101_01f6, "negativeButtonText"),
    (0x0101_01f7, "dialogLayout"),
    (0x0101_01f8, "entryValues"),
    (0x0101_01f9, "ringtoneType"),
    (0x0101_01fa, "showDefault"),
    (0x0101_01fb, "showSilent"),
    (0x0101_01fc, "scaleWidth"),
    (0x0101_01fd, "scaleHeight"),
    (0x0101_01fe, "scaleGravity"),
    (0x0101_01ff, "ignoreGravity"),
    (0x0101_0200, "foregroundGravity"),
    (0x0101_0201, "tileMode"),
    (0x0101_0202, "targetActivity"),
    (0x0101_0203, "alwaysRetainTaskState"),
    (0x0101_0204, "allowTaskReparenting"),
    (0x0101_0205, "searchButtonText"),
    (0x0101_0206, "colorForegroundInverse"),
    (0x0101_0207, "textAppearanceButton"),
    (0x0101_0208, "listSeparatorTextViewStyle"),
    (0x0101_0209, "streamType"),
    (0x0101_020a, "clipOrientation"),
    (0x0101_020b, "centerColor"),
    (0x0101_020c, "minSdkVersion"),
    (0x0101_020d, "windowFullscreen"),
    (0x0101_020e, "unselectedAlpha"),
    (0x0101_020f, "progressBarStyleSmallTitle"),
    (0x0101_0210, "ratingBarStyleIndicator"),
    (0x0101_0211, "apiKey"),
    (0x0101_0212, "textColorTertiary"),
    (0x0101_0213, "textColorTertiaryInverse"),
    (0x0101_0214, "listDivider"),
    (0x0101_0215, "soundEffectsEnabled"),
    (0x0101_0216, "keepScreenOn"),
    (0x0101_0217, "lineSpacingExtra"),
    (0x0101_0218, "lineSpacingMultiplier"),
    (0x0101_0219, "listChoiceIndicatorSingle"),
    (0x0101_021a, "listChoiceIndicatorMultiple"),
    (0x0101_021b, "versionCode"),
    (0x0101_021c, "versionName"),
    (0x0101_021d, "marqueeRepeatLimit"),
    (0x0101_021e, "windowNoDisplay"),
    (0x0101_021f, "backgroundDimEnabled"),
    (0x0101_0220, "inputType"),
    (0x0101_0221, "isDefault"),
    (0x0101_0222, "windowDisablePreview"),
    (0x0101_0223, "privateImeOptions"),
    (0x0101_0224, "editorExtras"),
    (0x0101_0225, "settingsActivity"),
    (0x0101_0226, "fastScrollEnabled"),
    (0x0101_0227, "reqTouchScreen"),
    (0x0101_0228, "reqKeyboardType"),
    (0x0101_0229, "reqHardKeyboard"),
    (0x0101_022a, "reqNavigation"),
    (0x0101_022b, "windowSoftInputMode"),
    (0x0101_022c, "imeFullscreenBackground"),
    (0x0101_022d, "noHistory"),
    (0x0101_022e, "headerDividersEnabled"),
    (0x0101_022f, "footerDividersEnabled"),
    (0x0101_0230, "candidatesTextStyleSpans"),
    (0x0101_0231, "smoothScrollbar"),
    (0x0101_0232, "reqFiveWayNav"),
    (0x0101_0233, "keyBackground"),
    (0x0101_0234, "keyTextSize"),
    (0x0101_0235, "labelTextSize"),
    (0x0101_0236, "keyTextColor"),
    (0x0101_0237, "keyPreviewLayout"),
    (0x0101_0238, "keyPreviewOffset"),
    (0x0101_0239, "keyPreviewHeight"),
    (0x0101_023a, "verticalCorrection"),
    (0x0101_023b, "popupLayout"),
    (0x0101_023c, "state_long_pressable"),
    (0x0101_023d, "keyWidth"),
    (0x0101_023e, "keyHeight"),
    (0x0101_023f, "horizontalGap"),
    (0x0101_0240, "verticalGap"),
    (0x0101_0241, "rowEdgeFlags"),
    (0x0101_0242, "codes"),
    (0x0101_0243, "popupKeyboard"),
    (0x0101_0244, "popupCharacters"),
    (0x0101_0245, "keyEdgeFlags"),
    (0x0101_0246, "isModifier"),
    (0x0101_0247, "isSticky"),
    (0x0101_0248, "isRepeatable"),
    (0x0101_0249, "iconPreview"),
    (0x0101_024a, "keyOutputText"),
    (0x0101_024b, "keyLabel"),
    (0x0101_024c, "keyIcon"),
    (0x0101_024d, "keyboardMode"),
    (0x0101_024e, "isScrollContainer"),
    (0x0101_024f, "fillEnabled"),
    (0x0101_0250, "updatePeriodMillis"),
    (0x0101_0251, "initialLayout"),
    (0x0101_0252, "voiceSearchMode"),
    (0x0101_0253, "voiceLanguageModel"),
    (0x0101_0254, "voicePromptText"),
    (0x0101_0255, "voiceLanguage"),
    (0x0101_0256, "voiceMaxResults"),
    (0x0101_0257, "bottomOffset"),
    (0x0101_0258, "topOffset"),
    (0x0101_0259, "allowSingleTap"),
    (0x0101_025a, "handle"),
    (0x0101_025b, "content"),
    (0x0101_025c, "animateOnClick"),
    (0x0101_025d, "configure"),
    (0x0101_025e, "hapticFeedbackEnabled"),
    (0x0101_025f, "innerRadius"),
    (0x0101_0260, "thickness"),
    (0x0101_0261, "sharedUserLabel"),
    (0x0101_0262, "dropDownWidth"),
    (0x0101_0263, "dropDownAnchor"),
    (0x0101_0264, "imeOptions"),
    (0x0101_0265, "imeActionLabel"),
    (0x0101_0266, "imeActionId"),
    (0x0101_0268, "imeExtractEnterAnimation"),
    (0x0101_0269, "imeExtractExitAnimation"),
    (0x0101_026a, "tension"),
    (0x0101_026b, "extraTension"),
    (0x0101_026c, "anyDensity"),
    (0x0101_026d, "searchSuggestThreshold"),
    (0x0101_026e, "includeInGlobalSearch"),
    (0x0101_026f, "onClick"),
    (0x0101_0270, "targetSdkVersion"),
    (0x0101_0271, "maxSdkVersion"),
    (0x0101_0272, "testOnly"),
    (0x0101_0273, "contentDescription"),
    (0x0101_0274, "gestureStrokeWidth"),
    (0x0101_0275, "gestureColor"),
    (0x0101_0276, "uncertainGestureColor"),
    (0x0101_0277, "fadeOffset"),
    (0x0101_0278, "fadeDuration"),
    (0x0101_0279, "gestureStrokeType"),
    (0x0101_027a, "gestureStrokeLengthThreshold"),
    (0x0101_027b, "gestureStrokeSquarenessThreshold"),
    (0x0101_027c, "gestureStrokeAngleThreshold"),
    (0x0101_027d, "eventsInterceptionEnabled"),
    (0x0101_027e, "fadeEnabled"),
    (0x0101_027f, "backupAgent"),
    (0x0101_0280, "allowBackup"),
    (0x0101_0281, "glEsVersion"),
    (0x0101_0282, "queryAfterZeroResults"),
    (0x0101_0283, "dropDownHeight"),
    (0x0101_0284, "smallScreens"),
    (0x0101_0285, "normalScreens"),
    (0x0101_0286, "largeScreens"),
    (0x0101_0287, "progressBarStyleInverse"),
    (0x0101_0288, "progressBarStyleSmallInverse"),
    (0x0101_0289, "progressBarStyleLargeInverse"),
    (0x0101_028a, "searchSettingsDescription"),
    (0x0101_028b, "textColorPrimaryInverseDisableOnly"),
    (0x0101_028c, "autoUrlDetect"),
    (0x0101_028d, "resizeable"),
    (0x0101_028e, "required"),
    (0x0101_028f, "accountType"),
    (0x0101_0290, "contentAuthority"),
    (0x0101_0291, "userVisible"),
    (0x0101_0292, "windowShowWallpaper"),
    (0x0101_0293, "wallpaperOpenEnterAnimation"),
    (0x0101_0294, "wallpaperOpenExitAnimation"),
    (0x0101_0295, "wallpaperCloseEnterAnimation"),
    (0x0101_0296, "wallpaperCloseExitAnimation"),
    (0x0101_0297, "wallpaperIntraOpenEnterAnimation"),
    (0x0101_0298, "wallpaperIntraOpenExitAnimation"),
    (0x0101_0299, "wallpaperIntraCloseEnterAnimation"),
    (0x0101_029a, "wallpaperIntraCloseExitAnimation"),
    (0x0101_029b, "supportsUploading"),
    (0x0101_029c, "killAfterRestore"),
    (0x0101_029d, "restoreNeedsApplication"),
    (0x0101_029e, "smallIcon"),
    (0x0101_029f, "accountPreferences"),
    (0x0101_02a0, "textAppearanceSearchResultSubtitle"),
    (0x0101_02a1, "textAppearanceSearchResultTitle"),
    (0x0101_02a2, "summaryColumn"),
    (0x0101_02a3, "detailColumn"),
    (0x0101_02a4, "detailSocialSummary"),
    (0x0101_02a5, "thumbnail"),
    (0x0101_02a6, "detachWallpaper"),
    (0x0101_02a7, "finishOnCloseSystemDialogs"),
    (0x0101_02a8, "scrollbarFadeDuration"),
    (0x0101_02a9, "scrollbarDefaultDelayBeforeFade"),
    (0x0101_02aa, "fadeScrollbars"),
    (0x0101_02ab, "colorBackgroundCacheHint"),
    (0x0101_02ac, "dropDownHorizontalOffset"),
    (0x0101_02ad, "dropDownVerticalOffset"),
    (0x0101_02ae, "quickContactBadgeStyleWindowSmall"),
    (0x0101_02af, "quickContactBadgeStyleWindowMedium"),
    (0x0101_02b0, "quickContactBadgeStyleWindowLarge"),
    (0x0101_02b1, "quickContactBadgeStyleSmallWindowSmall"),
    (0x0101_02b2, "quickContactBadgeStyleSmallWindowMedium"),
    (0x0101_02b3, "quickContactBadgeStyleSmallWindowLarge"),
    (0x0101_02b4, "author"),
    (0x0101_02b5, "autoStart"),
    (0x0101_02b6, "expandableListViewWhiteStyle"),
    (0x0101_02b7, "installLocation"),
    (0x0101_02b8, "vmSafeMode"),
    (0x0101_02b9, "webTextViewStyle"),
    (0x0101_02ba, "restoreAnyVersion"),
    (0x0101_02bb, "tabStripLeft"),
    (0x0101_02bc, "tabStripRight"),
    (0x0101_02bd, "tabStripEnabled"),
    (0x0101_02be, "logo"),
    (0x0101_02bf, "xlargeScreens"),
    (0x0101_02c0, "immersive"),
    (0x0101_02c1, "overScrollMode"),
    (0x0101_02c2, "overScrollHeader"),
    (0x0101_02c3, "overScrollFooter"),
    (0x0101_02c4, "filterTouchesWhenObscured"),
    (0x0101_02c5, "textSelectHandleLeft"),
    (0x0101_02c6, "textSelectHandleRight"),
    (0x0101_02c7, "textSelectHandle"),
    (0x0101_02c8, "textSelectHandleWindowStyle"),
    (0x0101_02c9, "popupAnimationStyle"),
    (0x0101_02ca, "screenSize"),
    (0x0101_02cb, "screenDensity"),
    (0x0101_02cc, "allContactsName"),
    (0x0101_02cd, "windowActionBar"),
    (0x0101_02ce, "actionBarStyle"),
    (0x0101_02cf, "navigationMode"),
    (0x0101_02d0, "displayOptions"),
    (0x0101_02d1, "subtitle"),
    (0x0101_02d2, "customNavigationLayout"),
    (0x0101_02d3, "hardwareAccelerated"),
    (0x0101_02d4, "measureWithLargestChild"),
    (0x0101_02d5, "animateFirstView"),
    (0x0101_02d6, "dropDownSpinnerStyle"),
    (0x0101_02d7, "actionDropDownStyle"),
    (0x0101_02d8, "actionButtonStyle"),
    (0x0101_02d9, "showAsAction"),
    (0x0101_02da, "previewImage"),
    (0x0101_02db, "actionModeBackground"),
    (0x0101_02dc, "actionModeCloseDrawable"),
    (0x0101_02dd, "windowActionModeOverlay"),
    (0x0101_02de, "valueFrom"),
    (0x0101_02df, "valueTo"),
    (0x0101_02e0, "valueType"),
    (0x0101_02e1, "propertyName"),
    (0x0101_02e2, "ordering"),
    (0x0101_02e3, "fragment"),
    (0x0101_02e4, "windowActionBarOverlay"),
    (0x0101_02e5, "fragmentOpenEnterAnimation"),
    (0x0101_02e6, "fragmentOpenExitAnimation"),
    (0x0101_02e7, "fragmentCloseEnterAnimation"),
    (0x0101_02e8, "fragmentCloseExitAnimation"),
    (0x0101_02e9, "fragmentFadeEnterAnimation"),
    (0x0101_02ea, "fragmentFadeExitAnimation"),
    (0x0101_02eb, "actionBarSize"),
    (0x0101_02ec, "imeSubtypeLocale"),
    (0x0101_02ed, "imeSubtypeMode"),
    (0x0101_02ee, "imeSubtypeExtraValue"),
    (0x0101_02ef, "splitMotionEvents"),
    (0x0101_02f0, "listChoiceBackgroundIndicator"),
    (0x0101_02f1, "spinnerMode"),
    (0x0101_02f2, "animateLayoutChanges"),
    (0x0101_02f3, "actionBarTabStyle"),
    (0x0101_02f4, "actionBarTabBarStyle"),
    (0x0101_02f5, "actionBarTabTextStyle"),
    (0x0101_02f6, "actionOverflowButtonStyle"),
    (0x0101_02f7, "actionModeCloseButtonStyle"),
    (0x0101_02f8, "titleTextStyle"),
    (0x0101_02f9, "subtitleTextStyle"),
    (0x0101_02fa, "iconifiedByDefault"),
    (0x0101_02fb, "actionLayout"),
    (0x0101_02fc, "actionViewClass"),
    (0x0101_02fd, "activatedBackgroundIndicator"),
    (0x0101_02fe, "state_activated"),
    (0x0101_02ff, "listPopupWindowStyle"),
    (0x0101_0300, "popupMenuStyle"),
    (0x0101_0301, "textAppearanceLargePopupMenu"),
    (0x0101_0302, "textAppearanceSmallPopupMenu"),
    (0x0101_0303, "breadCrumbTitle"),
    (0x0101_0304, "breadCrumbShortTitle"),
    (0x0101_0305, "listDividerAlertDialog"),
    (0x0101_0306, "textColorAlertDialogListItem"),
    (0x0101_0307, "loopViews"),
    (0x0101_0308, "dialogTheme"),
    (0x0101_0309, "alertDialogTheme"),
    (0x0101_030a, "dividerVertical"),
    (0x0101_030b, "homeAsUpIndicator"),
    (0x0101_030c, "enterFadeDuration"),
    (0x0101_030d, "exitFadeDuration"),
    (0x0101_030e, "selectableItemBackground"),
    (0x0101_030f, "autoAdvanceViewId"),
    (0x0101_0310, "useIntrinsicSizeAsMinimum"),
    (0x0101_0311, "actionModeCutDrawable"),
    (0x0101_0312, "actionModeCopyDrawable"),
    (0x0101_0313, "actionModePasteDrawable"),
    (0x0101_0314, "textEditPasteWindowLayout"),
    (0x0101_0315, "textEditNoPasteWindowLayout"),
    (0x0101_0316, "textIsSelectable"),
    (0x0101_0317, "windowEnableSplitTouch"),
    (0x0101_0318, "indeterminateProgressStyle"),
    (0x0101_0319, "progressBarPadding"),
    (0x0101_031a, "animationResolution"),
    (0x0101_031b, "state_accelerated"),
    (0x0101_031c, "baseline"),
    (0x0101_031d, "homeLayout"),
    (0x0101_031e, "opacity"),
    (0x0101_031f, "alpha"),
    (0x0101_0320, "transformPivotX"),
    (0x0101_0321, "transformPivotY"),
    (0x0101_0322, "translationX"),
    (0x0101_0323, "translationY"),
    (0x0101_0324, "scaleX"),
    (0x0101_0325, "scaleY"),
    (0x0101_0326, "rotation"),
    (0x0101_0327, "rotationX"),
    (0x0101_0328, "rotationY"),
    (0x0101_0329, "showDividers"),
    (0x0101_032a, "dividerPadding"),
    (0x0101_032b, "borderlessButtonStyle"),
    (0x0101_032c, "dividerHorizontal"),
    (0x0101_032d, "itemPadding"),
    (0x0101_032e, "buttonBarStyle"),
    (0x0101_032f, "buttonBarButtonStyle"),
    (0x0101_0330, "segmentedButtonStyle"),
    (0x0101_0331, "staticWallpaperPreview"),
    (0x0101_0332, "allowParallelSyncs"),
    (0x0101_0333, "isAlwaysSyncable"),
    (0x0101_0334, "verticalScrollbarPosition"),
    (0x0101_0335, "fastScrollAlwaysVisible"),
    (0x0101_0336, "fastScrollThumbDrawable"),
    (0x0101_0337, "fastScrollPreviewBackgroundLeft"),
    (0x0101_0338, "fastScrollPreviewBackgroundRight"),
    (0x0101_0339, "fastScrollTrackDrawable"),
    (0x0101_033a, "fastScrollOverlayPosition"),
    (0x0101_033b, "customTokens"),
    (0x0101_033c, "nextFocusForward"),
    (0x0101_033d, "firstDayOfWeek"),
    (0x0101_033e, "showWeekNumber"),
    (0x0101_033f, "minDate"),
    (0x0101_0340, "maxDate"),
    (0x0101_0341, "shownWeekCount"),
    (0x0101_0342, "selectedWeekBackgroundColor"),
    (0x0101_0343, "focusedMonthDateColor"),
    (0x0101_0344, "unfocusedMonthDateColor"),
    (0x0101_0345, "weekNumberColor"),
    (0x0101_0346, "weekSeparatorLineColor"),
    (0x0101_0347, "selectedDateVerticalBar"),
    (0x0101_0348, "weekDayTextAppearance"),
    (0x0101_0349, "dateTextAppearance"),
    (0x0101_034a, "solidColor"),
    (0x0101_034b, "spinnersShown"),
    (0x0101_034c, "calendarViewShown"),
    (0x0101_034d, "state_multiline"),
    (0x0101_034e, "detailsElementBackground"),
    (0x0101_034f, "textColorHighlightInverse"),
    (0x0101_0350, "textColorLinkInverse"),
    (0x0101_0351, "editTextColor"),
    (0x0101_0352, "editTextBackground"),
    (0x0101_0353, "horizontalScrollViewStyle"),
    (0x0101_0354, "layerType"),
    (0x0101_0355, "alertDialogIcon"),
    (0x0101_0356, "windowMinWidthMajor"),
    (0x0101_0357, "windowMinWidthMinor"),
    (0x0101_0358, "queryHint"),
    (0x0101_0359, "fastScrollTextColor"),
    (0x0101_035a, "largeHeap"),
    (0x0101_035b, "windowCloseOnTouchOutside"),
    (0x0101_035c, "datePickerStyle"),
    (0x0101_035d, "calendarViewStyle"),
    (0x0101_035e, "textEditSidePasteWindowLayout"),
    (0x0101_035f, "textEditSideNoPasteWindowLayout"),
    (0x0101_0360, "actionMenuTextAppearance"),
    (0x0101_0361, "actionMenuTextColor"),
    (0x0101_0362, "textCursorDrawable"),
    (0x0101_0363, "resizeMode"),
    (0x0101_0364, "requiresSmallestWidthDp"),
    (0x0101_0365, "compatibleWidthLimitDp"),
    (0x0101_0366, "largestWidthLimitDp"),
    (0x0101_0367, "state_hovered"),
    (0x0101_0368, "state_drag_can_accept"),
    (0x0101_0369, "state_drag_hovered"),
    (0x0101_036a, "stopWithTask"),
    (0x0101_036b, "switchTextOn"),
    (0x0101_036c, "switchTextOff"),
    (0x0101_036d, "switchPreferenceStyle"),
    (0x0101_036e, "switchTextAppearance"),
    (0x0101_036f, "track"),
    (0x0101_0370, "switchMinWidth"),
    (0x0101_0371, "switchPadding"),
    (0x0101_0372, "thumbTextPadding"),
    (0x0101_0373, "textSuggestionsWindowStyle"),
    (0x0101_0374, "textEditSuggestionItemLayout"),
    (0x0101_0375, "rowCount"),
    (0x0101_0376, "rowOrderPreserved"),
    (0x0101_0377, "columnCount"),
    (0x0101_0378, "columnOrderPreserved"),
    (0x0101_0379, "useDefaultMargins"),
    (0x0101_037a, "alignmentMode"),
    (0x0101_037b, "layout_row"),
    (0x0101_037c, "layout_rowSpan"),
    (0x0101_037d, "layout_columnSpan"),
    (0x0101_037e, "actionModeSelectAllDrawable"),
    (0x0101_037f, "isAuxiliary"),
    (0x0101_0380, "accessibilityEventTypes"),
    (0x0101_0381, "packageNames"),
    (0x0101_0382, "accessibilityFeedbackType"),
    (0x0101_0383, "notificationTimeout"),
    (0x0101_0384, "accessibilityFlags"),
    (0x0101_0385, "canRetrieveWindowContent"),
    (0x0101_0386, "listPreferredItemHeightLarge"),
    (0x0101_0387, "listPreferredItemHeightSmall"),
    (0x0101_0388, "actionBarSplitStyle"),
    (0x0101_0389, "actionProviderClass"),
    (0x0101_038a, "backgroundStacked"),
    (0x0101_038b, "backgroundSplit"),
    (0x0101_038c, "textAllCaps"),
    (0x0101_038d, "colorPressedHighlight"),
    (0x0101_038e, "colorLongPressedHighlight"),
    (0x0101_038f, "colorFocusedHighlight"),
    (0x0101_0390, "colorActivatedHighlight"),
    (0x0101_0391, "colorMultiSelectHighlight"),
    (0x0101_0392, "drawableStart"),
    (0x0101_0393, "drawableEnd"),
    (0x0101_0394, "actionModeStyle"),
    (0x0101_0395, "minResizeWidth"),
    (0x0101_0396, "minResizeHeight"),
    (0x0101_0397, "actionBarWidgetTheme"),
    (0x0101_0398, "uiOptions"),
    (0x0101_0399, "subtypeLocale"),
    (0x0101_039a, "subtypeExtraValue"),
    (0x0101_039b, "actionBarDivider"),
    (0x0101_039c, "actionBarItemBackground"),
    (0x0101_039d, "actionModeSplitBackground"),
    (0x0101_039e, "textAppearanceListItem"),
    (0x0101_039f, "textAppearanceListItemSmall"),
    (0x0101_03a0, "targetDescriptions"),
    (0x0101_03a1, "directionDescriptions"),
    (0x0101_03a2, "overridesImplicitlyEnabledSubtype"),
    (0x0101_03a3, "listPreferredItemPaddingLeft"),
    (0x0101_03a4, "listPreferredItemPaddingRight"),
    (0x0101_03a5, "requiresFadingEdge"),
    (0x0101_03a6, "publicKey"),
    (0x0101_03a7, "parentActivityName"),
    (0x0101_03a9, "isolatedProcess"),
    (0x0101_03aa, "importantForAccessibility"),
    (0x0101_03ab, "keyboardLayout"),
    (0x0101_03ac, "fontFamily"),
    (0x0101_03ad, "mediaRouteButtonStyle"),
    (0x0101_03ae, "mediaRouteTypes"),
    (0x0101_03af, "supportsRtl"),
    (0x0101_03b0, "textDirection"),
    (0x0101_03b1, "textAlignment"),
    (0x0101_03b2, "layoutDirection"),
    (0x0101_03b3, "paddingStart"),
    (0x0101_03b4, "paddingEnd"),
    (0x0101_03b5, "layout_marginStart"),
    (0x0101_03b6, "layout_marginEnd"),
    (0x0101_03b7, "layout_toStartOf"),
    (0x0101_03b8, "layout_toEndOf"),
    (0x0101_03b9, "layout_alignStart"),
    (0x0101_03ba, "layout_alignEnd"),
    (0x0101_03bb, "layout_alignParentStart"),
    (0x0101_03bc, "layout_alignParentEnd"),
    (0x0101_03bd, "listPreferredItemPaddingStart"),
    (0x0101_03be, "listPreferredItemPaddingEnd"),
    (0x0101_03bf, "singleUser"),
    (0x0101_03c0, "presentationTheme"),
    (0x0101_03c1, "subtypeId"),
    (0x0101_03c2, "initialKeyguardLayout"),
    (0x0101_03c4, "widgetCategory"),
    (0x0101_03c5, "permissionGroupFlags"),
    (0x0101_03c6, "labelFor"),
    (0x0101_03c7, "permissionFlags"),
    (0x0101_03c8, "checkedTextViewStyle"),
    (0x0101_03c9, "showOnLockScreen"),
    (0x0101_03ca, "format12Hour"),
    (0x0101_03cb, "format24Hour"),
    (0x0101_03cc, "timeZone"),
    (0x0101_03cd, "mipMap"),
    (0x0101_03ce, "mirrorForRtl"),
    (0x0101_03cf, "windowOverscan"),
    (0x0101_03d0, "requiredForAllUsers"),
    (0x0101_03d1, "indicatorStart"),
    (0x0101_03d2, "indicatorEnd"),
    (0x0101_03d3, "childIndicatorStart"),
    (0x0101_03d4, "childIndicatorEnd"),
    (0x0101_03d5, "restrictedAccountType"),
    (0x0101_03d6, "requiredAccountType"),
    (0x0101_03d7, "canRequestTouchExplorationMode"),
    (0x0101_03d8, "canRequestEnhancedWebAccessibility"),
    (0x0101_03d9, "canRequestFilterKeyEvents"),
    (0x0101_03da, "layoutMode"),
    (0x0101_03db, "keySet"),
    (0x0101_03dc, "targetId"),
    (0x0101_03dd, "fromScene"),
    (0x0101_03de, "toScene"),
    (0x0101_03df, "transition"),
    (0x0101_03e0, "transitionOrdering"),
    (0x0101_03e1, "fadingMode"),
    (0x0101_03e2, "startDelay"),
    (0x0101_03e3, "ssp"),
    (0x0101_03e4, "sspPrefix"),
    (0x0101_03e5, "sspPattern"),
    (0x0101_03e6, "addPrintersActivity"),
    (0x0101_03e7, "vendor"),
    (0x0101_03e8, "category"),
    (0x0101_03e9, "isAsciiCapable"),
    (0x0101_03ea, "autoMirrored"),
    (0x0101_03eb, "supportsSwitchingToNextInputMethod"),
    (0x0101_03ec, "requireDeviceUnlock"),
    (0x0101_03ed, "apduServiceBanner"),
    (0x0101_03ee, "accessibilityLiveRegion"),
    (0x0101_03ef, "windowTranslucentStatus"),
    (0x0101_03f0, "windowTranslucentNavigation"),
    (0x0101_03f1, "advancedPrintOptionsActivity"),
    (0x0101_03f2, "banner"),
    (0x0101_03f3, "windowSwipeToDismiss"),
    (0x0101_03f4, "isGame"),
    (0x0101_03f5, "allowEmbedded"),
    (0x0101_03f6, "setupActivity"),
    (0x0101_03f7, "fastScrollStyle"),
    (0x0101_03f8, "windowContentTransitions"),
    (0x0101_03f9, "windowContentTransitionManager"),
    (0x0101_03fa, "translationZ"),
    (0x0101_03fb, "tintMode"),
    (0x0101_03fc, "controlX1"),
    (0x0101_03fd, "controlY1"),
    (0x0101_03fe, "controlX2"),
    (0x0101_03ff, "controlY2"),
    (0x0101_0400, "transitionName"),
    (0x0101_0401, "transitionGroup"),
    (0x0101_0402, "viewportWidth"),
    (0x0101_0403, "viewportHeight"),
    (0x0101_0404, "fillColor"),
    (0x0101_0405, "pathData"),
    (0x0101_0406, "strokeColor"),
    (0x0101_0407, "strokeWidth"),
    (0x0101_0408, "trimPathStart"),
    (0x0101_0409, "trimPathEnd"),
    (0x0101_040a, "trimPathOffset"),
    (0x0101_040b, "strokeLineCap"),
    (0x0101_040c, "strokeLineJoin"),
    (0x0101_040d, "strokeMiterLimit"),
    (0x0101_0429, "colorControlNormal"),
    (0x0101_042a, "colorControlActivated"),
    (0x0101_042b, "colorButtonNormal"),
    (0x0101_042c, "colorControlHighlight"),
    (0x0101_042d, "persistableMode"),
    (0x0101_042e, "titleTextAppearance"),
    (0x0101_042f, "subtitleTextAppearance"),
    (0x0101_0430, "slideEdge"),
    (0x0101_0431, "actionBarTheme"),
    (0x0101_0432, "textAppearanceListItemSecondary"),
    (0x0101_0433, "colorPrimary"),
    (0x0101_0434, "colorPrimaryDark"),
    (0x0101_0435, "colorAccent"),
    (0x0101_0436, "nestedScrollingEnabled"),
    (0x0101_0437, "windowEnterTransition"),
    (0x0101_0438, "windowExitTransition"),
    (0x0101_0439, "windowSharedElementEnterTransition"),
    (0x0101_043a, "windowSharedElementExitTransition"),
    (0x0101_043b, "windowAllowReturnTransitionOverlap"),
    (0x0101_043c, "windowAllowEnterTransitionOverlap"),
    (0x0101_043d, "sessionService"),
    (0x0101_043e, "stackViewStyle"),
    (0x0101_043f, "switchStyle"),
    (0x0101_0440, "elevation"),
    (0x0101_0441, "excludeId"),
    (0x0101_0442, "excludeClass"),
    (0x0101_0443, "hideOnContentScroll"),
    (0x0101_0444, "actionOverflowMenuStyle"),
    (0x0101_0445, "documentLaunchMode"),
    (0x0101_0446, "maxRecents"),
    (0x0101_0447, "autoRemoveFromRecents"),
    (0x0101_0448, "stateListAnimator"),
    (0x0101_0449, "toId"),
    (0x0101_044a, "fromId"),
    (0x0101_044b, "reversible"),
    (0x0101_044c, "splitTrack"),
    (0x0101_044d, "targetName"),
    (0x0101_044e, "excludeName"),
    (0x0101_044f, "matchOrder"),
    (0x0101_0450, "windowDrawsSystemBarBackgrounds"),
    (0x0101_0451, "statusBarColor"),
    (0x0101_0452, "navigationBarColor"),
    (0x0101_0453, "contentInsetStart"),
    (0x0101_0454, "contentInsetEnd"),
    (0x0101_0455, "contentInsetLeft"),
    (0x0101_0456, "contentInsetRight"),
    (0x0101_0457, "paddingMode"),
    (0x0101_0458, "layout_rowWeight"),
    (0x0101_0459, "layout_columnWeight"),
    (0x0101_045a, "translateX"),
    (0x0101_045b, "translateY"),
    (0x0101_045c, "selectableItemBackgroundBorderless"),
    (0x0101_045d, "elegantTextHeight"),
    (0x0101_045e, "searchKeyphraseId"),
    (0x0101_045f, "searchKeyphrase"),
    (0x0101_0460, "searchKeyphraseSupportedLocales"),
    (0x0101_0461, "windowTransitionBackgroundFadeDuration"),
    (0x0101_0462, "overlapAnchor"),
    (0x0101_0463, "progressTint"),
    (0x0101_0464, "progressTintMode"),
    (0x0101_0465, "progressBackgroundTint"),
    (0x0101_0466, "progressBackgroundTintMode"),
    (0x0101_0467, "secondaryProgressTint"),
    (0x0101_0468, "secondaryProgressTintMode"),
    (0x0101_0469, "indeterminateTint"),
    (0x0101_046a, "indeterminateTintMode"),
    (0x0101_046b, "backgroundTint"),
    (0x0101_046c, "backgroundTintMode"),
    (0x0101_046d, "foregroundTint"),
    (0x0101_046e, "foregroundTintMode"),
    (0x0101_046f, "buttonTint"),
    (0x0101_0470, "buttonTintMode"),
    (0x0101_0471, "thumbTint"),
    (0x0101_0472, "thumbTintMode"),
    (0x0101_0473, "fullBackupOnly"),
    (0x0101_0474, "propertyXName"),
    (0x0101_0475, "propertyYName"),
    (0x0101_0476, "relinquishTaskIdentity"),
    (0x0101_0477, "tileModeX"),
    (0x0101_0478, "tileModeY"),
    (0x0101_0479, "actionModeShareDrawable"),
    (0x0101_047a, "actionModeFindDrawable"),
    (0x0101_047b, "actionModeWebSearchDrawable"),
    (0x0101_047c, "transitionVisibilityMode"),
    (0x0101_047d, "minimumHorizontalAngle"),
    (0x0101_047e, "minimumVerticalAngle"),
    (0x0101_047f, "maximumAngle"),
    (0x0101_0480, "searchViewStyle"),
    (0x0101_0481, "closeIcon"),
    (0x0101_0482, "goIcon"),
    (0x0101_0483, "searchIcon"),
    (0x0101_0484, "voiceIcon"),
    (0x0101_0485, "commitIcon"),
    (0x0101_0486, "suggestionRowLayout"),
    (0x0101_0487, "queryBackground"),
    (0x0101_0488, "submitBackground"),
    (0x0101_0489, "buttonBarPositiveButtonStyle"),
    (0x0101_048a, "buttonBarNeutralButtonStyle"),
    (0x0101_048b, "buttonBarNegativeButtonStyle"),
    (0x0101_048c, "popupElevation"),
    (0x0101_048d, "actionBarPopupTheme"),
    (0x0101_048e, "multiArch"),
    (0x0101_048f, "touchscreenBlocksFocus"),
    (0x0101_0490, "windowElevation"),
    (0x0101_0491, "launchTaskBehindTargetAnimation"),
    (0x0101_0492, "launchTaskBehindSourceAnimation"),
    (0x0101_0493, "restrictionType"),
    (0x0101_0494, "dayOfWeekBackground"),
    (0x0101_0495, "dayOfWeekTextAppearance"),
    (0x0101_0496, "headerMonthTextAppearance"),
    (0x0101_0497, "headerDayOfMonthTextAppearance"),
    (0x0101_0498, "headerYearTextAppearance"),
    (0x0101_0499, "yearListItemTextAppearance"),
    (0x0101_049a, "yearListSelectorColor"),
    (0x0101_049b, "calendarTextColor"),
    (0x0101_049c, "recognitionService"),
    (0x0101_049d, "timePickerStyle"),
    (0x0101_049e, "timePickerDialogTheme"),
    (0x0101_049f, "headerTimeTextAppearance"),
    (0x0101_04a0, "headerAmPmTextAppearance"),
    (0x0101_04a1, "numbersTextColor"),
    (0x0101_04a2, "numbersBackgroundColor"),
    (0x0101_04a3, "numbersSelectorColor"),
    (0x0101_04a4, "amPmTextColor"),
    (0x0101_04a5, "amPmBackgroundColor"),
    (0x0101_04a6, "searchKeyphraseRecognitionFlags"),
    (0x0101_04a7, "checkMarkTint"),
    (0x0101_04a8, "checkMarkTintMode"),
    (0x0101_04a9, "popupTheme"),
    (0x0101_04aa, "toolbarStyle"),
    (0x0101_04ab, "windowClipToOutline"),
    (0x0101_04ac, "datePickerDialogTheme"),
    (0x0101_04ad, "showText"),
    (0x0101_04ae, "windowReturnTransition"),
    (0x0101_04af, "windowReenterTransition"),
    (0x0101_04b0, "windowSharedElementReturnTransition"),
    (0x0101_04b1, "windowSharedElementReenterTransition"),
    (0x0101_04b2, "resumeWhilePausing"),
    (0x0101_04b3, "datePickerMode"),
    (0x0101_04b4, "timePickerMode"),
    (0x0101_04b5, "inset"),
    (0x0101_04b6, "letterSpacing"),
    (0x0101_04b7, "fontFeatureSettings"),
    (0x0101_04b8, "outlineProvider"),
    (0x0101_04b9, "contentAgeHint"),
    (0x0101_04ba, "country"),
    (0x0101_04bb, "windowSharedElementsUseOverlay"),
    (0x0101_04bc, "reparent"),
    (0x0101_04bd, "reparentWithOverlay"),
    (0x0101_04be, "ambientShadowAlpha"),
    (0x0101_04bf, "spotShadowAlpha"),
    (0x0101_04c0, "navigationIcon"),
    (0x0101_04c1, "navigationContentDescription"),
    (0x0101_04c2, "fragmentExitTransition"),
    (0x0101_04c3, "fragmentEnterTransition"),
    (0x0101_04c4, "fragmentSharedElementEnterTransition"),
    (0x0101_04c5, "fragmentReturnTransition"),
    (0x0101_04c6, "fragmentSharedElementReturnTransition"),
    (0x0101_04c7, "fragmentReenterTransition"),
    (0x0101_04c8, "fragmentAllowEnterTransitionOverlap"),
    (0x0101_04c9, "fragmentAllowReturnTransitionOverlap"),
    (0x0101_04ca, "patternPathData"),
    (0x0101_04cb, "strokeAlpha"),
    (0x0101_04cc, "fillAlpha"),
    (0x0101_04cd, "windowActivityTransitions"),
    (0x0101_04ce, "colorEdgeEffect"),
    (0x0101_04cf, "resizeClip"),
    (0x0101_04d0, "collapseContentDescription"),
    (0x0101_04d1, "accessibilityTraversalBefore"),
    (0x0101_04d2, "accessibilityTraversalAfter"),
    (0x0101_04d3, "dialogPreferredPadding"),
    (0x0101_04d4, "searchHintIcon"),
    (0x0101_04d5, "revisionCode"),
    (0x0101_04d6, "drawableTint"),
    (0x0101_04d7, "drawableTintMode"),
    (0x0101_04d8, "fraction"),
    (0x0101_04d9, "trackTint"),
    (0x0101_04da, "trackTintMode"),
    (0x0101_04db, "start"),
    (0x0101_04dc, "end"),
    (0x0101_04dd, "breakStrategy"),
    (0x0101_04de, "hyphenationFrequency"),
    (0x0101_04df, "allowUndo"),
    (0x0101_04e0, "windowLightStatusBar"),
    (0x0101_04e1, "numbersInnerTextColor"),
    (0x0101_04e2, "colorBackgroundFloating"),
    (0x0101_04e3, "titleTextColor"),
    (0x0101_04e4, "subtitleTextColor"),
    (0x0101_04e5, "thumbPosition"),
    (0x0101_04e6, "scrollIndicators"),
    (0x0101_04e7, "contextClickable"),
    (0x0101_04e8, "fingerprintAuthDrawable"),
    (0x0101_04e9, "logoDescription"),
    (0x0101_04ea, "extractNativeLibs"),
    (0x0101_04eb, "fullBackupContent"),
    (0x0101_04ec, "usesCleartextTraffic"),
    (0x0101_04ed, "lockTaskMode"),
    (0x0101_04ee, "autoVerify"),
    (0x0101_04ef, "showForAllUsers"),
    (0x0101_04f0, "supportsAssist"),
    (0x0101_04f1, "supportsLaunchVoiceAssistFromKeyguard"),
    (0x0101_04f2, "listMenuViewStyle"),
    (0x0101_04f3, "subMenuArrow"),
    (0x0101_04f4, "defaultWidth"),
    (0x0101_04f5, "defaultHeight"),
    (0x0101_04f6, "resizeableActivity"),
    (0x0101_04f7, "supportsPictureInPicture"),
    (0x0101_04f8, "titleMargin"),
    (0x0101_04f9, "titleMarginStart"),
    (0x0101_04fa, "titleMarginEnd"),
    (0x0101_04fb, "titleMarginTop"),
    (0x0101_04fc, "titleMarginBottom"),
    (0x0101_04fd, "maxButtonHeight"),
    (0x0101_04fe, "buttonGravity"),
    (0x0101_04ff, "collapseIcon"),
    (0x0101_0500, "level"),
    (0x0101_0501, "contextPopupMenuStyle"),
    (0x0101_0502, "textAppearancePopupMenuHeader"),
    (0x0101_0503, "windowBackgroundFallback"),
    (0x0101_0504, "defaultToDeviceProtectedStorage"),
    (0x0101_0505, "directBootAware"),
    (0x0101_0506, "preferenceFragmentStyle"),
    (0x0101_0507, "canControlMagnification"),
    (0x0101_0508, "languageTag"),
    (0x0101_0509, "pointerIcon"),
    (0x0101_050a, "tickMark"),
    (0x0101_050b, "tickMarkTint"),
    (0x0101_050c, "tickMarkTintMode"),
    (0x0101_050d, "canPerformGestures"),
    (0x0101_050e, "externalService"),
    (0x0101_050f, "supportsLocalInteraction"),
    (0x0101_0510, "startX"),
    (0x0101_0511, "startY"),
    (0x0101_0512, "endX"),
    (0x0101_0513, "endY"),
    (0x0101_0514, "offset"),
    (0x0101_0515, "use32bitAbi"),
    (0x0101_0516, "bitmap"),
    (0x0101_0517, "hotSpotX"),
    (0x0101_0518, "hotSpotY"),
    (0x0101_0519, "version"),
    (0x0101_051a, "backupInForeground"),
    (0x0101_051b, "countDown"),
    (0x0101_051c, "canRecord"),
    (0x0101_051d, "tunerCount"),
    (0x0101_051e, "fillType"),
    (0x0101_051f, "popupEnterTransition"),
    (0x0101_0520, "popupExitTransition"),
    (0x0101_0521, "forceHasOverlappingRendering"),
    (0x0101_0522, "contentInsetStartWithNavigation"),
    (0x0101_0523, "contentInsetEndWithActions"),
    (0x0101_0524, "numberPickerStyle"),
    (0x0101_0525, "enableVrMode"),
    (0x0101_0526, "hash"),
    (0x0101_0527, "networkSecurityConfig"),
    (0x0101_0528, "shortcutId"),
    (0x0101_0529, "shortcutShortLabel"),
    (0x0101_052a, "shortcutLongLabel"),
    (0x0101_052b, "shortcutDisabledMessage"),
    (0x0101_052c, "roundIcon"),
    (0x0101_052d, "contextUri"),
    (0x0101_052e, "contextDescription"),
    (0x0101_052f, "showMetadataInPreview"),
    (0x0101_0530, "colorSecondary"),
    (0x0101_0531, "visibleToInstantApps"),
    (0x0101_0532, "font"),
    (0x0101_0533, "fontWeight"),
    (0x0101_0534, "tooltipText"),
    (0x0101_0535, "autoSizeTextType"),
    (0x0101_0536, "autoSizeStepGranularity"),
    (0x0101_0537, "autoSizePresetSizes"),
    (0x0101_0538, "autoSizeMinTextSize"),
    (0x0101_0539, "min"),
    (0x0101_053a, "rotationAnimation"),
    (0x0101_053b, "layout_marginHorizontal"),
    (0x0101_053c, "layout_marginVertical"),
    (0x0101_053d, "paddingHorizontal"),
    (0x0101_053e, "paddingVertical"),
    (0x0101_053f, "fontStyle"),
    (0x0101_0540, "keyboardNavigationCluster"),
    (0x0101_0541, "targetProcesses"),
    (0x0101_0542, "nextClusterForward"),
    (0x0101_0543, "colorError"),
    (0x0101_0544, "focusedByDefault"),
    (0x0101_0545, "appCategory"),
    (0x0101_0546, "autoSizeMaxTextSize"),
    (0x0101_0547, "recreateOnConfigChanges"),
    (0x0101_0548, "certDigest"),
    (0x0101_0549, "splitName"),
    (0x0101_054a, "colorMode"),
    (0x0101_054b, "isolatedSplits"),
    (0x0101_054c, "targetSandboxVersion"),
    (0x0101_054d, "canRequestFingerprintGestures"),
    (0x0101_054e, "alphabeticModifiers"),
    (0x0101_054f, "numericModifiers"),
    (0x0101_0550, "fontProviderAuthority"),
    (0x0101_0551, "fontProviderQuery"),
    (0x0101_0552, "primaryContentAlpha"),
    (0x0101_0553, "secondaryContentAlpha"),
    (0x0101_0554, "requiredFeature"),
    (0x0101_0555, "requiredNotFeature"),
    (0x0101_0556, "autofillHints"),
    (0x0101_0557, "fontProviderPackage"),
    (0x0101_0558, "importantForAutofill"),
    (0x0101_0559, "recycleEnabled"),
    (0x0101_055a, "isStatic"),
    (0x0101_055b, "isFeatureSplit"),
    (0x0101_055c, "singleLineTitle"),
    (0x0101_055d, "fontProviderCerts"),
    (0x0101_055e, "iconTint"),
    (0x0101_055f, "iconTintMode"),
    (0x0101_0560, "maxAspectRatio"),
    (0x0101_0561, "iconSpaceReserved"),
    (0x0101_0562, "defaultFocusHighlightEnabled"),
    (0x0101_0563, "persistentWhenFeatureAvailable"),
    (0x0101_0564, "windowSplashscreenContent"),
    (0x0101_0565, "requiredSystemPropertyName"),
    (0x0101_0566, "requiredSystemPropertyValue"),
    (0x0101_0567, "justificationMode"),
    (0x0101_0568, "autofilledHighlight"),
    (0x0101_0569, "showWhenLocked"),
    (0x0101_056a, "turnScreenOn"),
    (0x0101_056b, "classLoader"),
    (0x0101_056c, "windowLightNavigationBar"),
    (0x0101_056d, "navigationBarDividerColor"),
    (0x0101_056e, "cantSaveState"),
    (0x0101_056f, "ttcIndex"),
    (0x0101_0570, "fontVariationSettings"),
    (0x0101_0571, "dialogCornerRadius"),
    (0x0101_0572, "compileSdkVersion"),
    (0x0101_0573, "compileSdkVersionCodename"),
    (0x0101_057a, "appComponentFactory"),
    (0x0101_057b, "fallbackLineSpacing"),
    (0x0101_057c, "accessibilityPaneTitle"),
    (0x0101_057d, "firstBaselineToTopHeight"),
    (0x0101_057e, "lastBaselineToBottomHeight"),
    (0x0101_057f, "lineHeight"),
    (0x0101_0580, "accessibilityHeading"),
    (0x0101_0581, "outlineSpotShadowColor"),
    (0x0101_0582, "outlineAmbientShadowColor"),
    (0x0101_0599, "foregroundServiceType"),
    (0x0101_0603, "requestLegacyExternalStorage"),
    (0x0101_0612, "allowNativeHeapPointerTagging"),
    (0x0101_0614, "preserveLegacyExternalStorage"),
    (0x0101_063e, "dataExtractionRules"),
]
